//! Init command implementation
//!
//! Generates a starter configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "veil.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Veil configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set VEIL_REMOTE_API_KEY in a .env file if the remote");
                println!("     detector requires one");
                println!("  3. Validate configuration: veil validate-config");
                println!("  4. Scan a message: veil scan \"Call me at 555-123-4567\"");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Starter configuration content
    fn starter_config() -> &'static str {
        r#"# Veil Configuration File
# PII detection and redaction engine

[application]
log_level = "info"

[detection]
# Matches must score strictly above this to be redacted
confidence_threshold = 0.7
# Uncomment to override the built-in pattern library
# pattern_library = "./patterns/pii_patterns.toml"

[detection.audit]
# JSONL audit log of detection calls; matched text is stored hashed
enabled = false
log_path = "./audit/detections.log"

# Remote detection service for hybrid mode. Remove this section (or set
# enabled = false) for local-only detection.
[remote]
base_url = "http://localhost:5000"
enabled = true
timeout_seconds = 3
# api_key = "${VEIL_REMOTE_API_KEY}"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
    }
}

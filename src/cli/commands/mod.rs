//! CLI command implementations

pub mod batch;
pub mod init;
pub mod scan;
pub mod validate;

use crate::config::{load_config, VeilConfig};
use std::path::Path;

/// Load configuration, falling back to defaults when the file is absent
///
/// `scan` and `batch` work out of the box with built-in patterns; an
/// explicit configuration file is only required for remote detection,
/// auditing, and overrides.
pub(crate) fn load_config_or_default(config_path: &str) -> anyhow::Result<VeilConfig> {
    if Path::new(config_path).exists() {
        Ok(load_config(config_path)?)
    } else {
        tracing::debug!(
            config_path = %config_path,
            "Configuration file not found, using defaults"
        );
        Ok(VeilConfig::default())
    }
}

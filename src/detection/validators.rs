//! Structural validators for categories that carry a checksum or range
//! invariant. Categories without one (email, SSN, address, name) rely on
//! pattern shape and context alone.

/// Luhn mod-10 check over a payment-card-like string.
///
/// Non-digit characters are stripped before the check. Digit strings shorter
/// than 13 or longer than 19 are invalid without computing the checksum.
pub fn luhn_valid(card_number: &str) -> bool {
    let digits: Vec<u32> = card_number.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;

    for &digit in digits.iter().rev() {
        let mut digit = digit;
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

/// IPv4 range check: every dot-separated segment must parse as an integer
/// in [0, 255].
pub fn ipv4_octets_valid(address: &str) -> bool {
    address
        .split('.')
        .all(|segment| matches!(segment.parse::<u32>(), Ok(octet) if octet <= 255))
}

/// Count of ASCII digits in a candidate, used to tell card-length digit
/// runs apart from shorter account numbers.
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

pub mod billing;
pub mod document;
pub mod inquiry;
pub mod maintenance;
pub mod notification;
pub mod property;
pub mod role;
pub mod session;
pub mod stats;
pub mod tenant;
pub mod unit;
pub mod user;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use std::str::FromStr;
use validator::ValidationError;

const ID_SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// `{prefix}_{unix millis}_{9 base36 chars}`. Collisions are unlikely, not impossible.
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_SUFFIX_ALPHABET[rng.gen_range(0..ID_SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{}_{}_{}", prefix, Utc::now().timestamp_millis(), suffix)
}

/// Money and prices travel as exact decimal strings and must not be negative.
pub fn validate_decimal_amount(value: &str) -> Result<(), ValidationError> {
    match Decimal::from_str(value.trim()) {
        Ok(amount) if amount.is_sign_negative() && !amount.is_zero() => {
            let mut err = ValidationError::new("negative_amount");
            err.message = Some("Amount must not be negative".into());
            Err(err)
        }
        Ok(_) => Ok(()),
        Err(_) => {
            let mut err = ValidationError::new("decimal");
            err.message = Some("Amount must be a decimal number".into());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_follow_prefix_pattern() {
        let id = generate_id("prop");
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "prop");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_id("inq"), generate_id("inq"));
    }

    #[test]
    fn test_decimal_amount_validation() {
        assert!(validate_decimal_amount("350000.00").is_ok());
        assert!(validate_decimal_amount("0").is_ok());
        assert!(validate_decimal_amount("-10.5").is_err());
        assert!(validate_decimal_amount("12,5").is_err());
        assert!(validate_decimal_amount("abc").is_err());
    }
}

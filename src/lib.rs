//! Identity key composition library.
//!
//! Builds a single delimited identifier string from a caller-selected,
//! ordered subset of entity fields, enforcing per-field presence rules
//! and a configurable maximum key length.

// Key composition module
mod building;
// Error handling module
mod errors;
// Field enumeration and property bag module
mod properties;

pub use building::{build_identity_key, KeyBuilder, DEFAULT_JOIN_CHAR, DEFAULT_MAX_KEY_LENGTH};
pub use errors::{BuildError, Result};
pub use properties::{KeyField, KeyProperties, SERVICE_DATE_LENGTH};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_public_surface_smoke() {
        let props = KeyProperties::new(
            Some("1234567890".to_string()),
            Some("ROOT-System".to_string()),
            None,
            NaiveDate::from_ymd_opt(2019, 11, 19),
        );
        let key = build_identity_key(
            &props,
            &[
                KeyField::SystemCode,
                KeyField::AccountNumber,
                KeyField::ServiceDate,
            ],
        )
        .unwrap();
        assert_eq!(key, "ROOT-System_1234567890_20191119");
        assert_eq!(KeyBuilder::default().max_key_length(), DEFAULT_MAX_KEY_LENGTH);
    }
}

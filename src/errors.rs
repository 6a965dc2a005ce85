use crate::properties::KeyField;
use thiserror::Error;

/// Errors returned while validating and composing an identity key.
///
/// All variants are input-validation failures. None are transient and
/// retrying with the same input will fail the same way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("at least one key field requirement must be defined")]
    EmptyRequirements,

    #[error("property {0} cannot be null or empty")]
    MissingField(KeyField),

    #[error("identity key cannot be more than {max} characters")]
    KeyTooLong { max: usize },

    #[error("key field '{0}' is not implemented")]
    UnsupportedField(u8),

    #[error("property ServiceDate year {0} must be between 0 and 9999")]
    ServiceDateOutOfRange(i32),
}

pub type Result<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let err = BuildError::MissingField(KeyField::SystemCode);
        assert_eq!(err.to_string(), "property SystemCode cannot be null or empty");

        let err = BuildError::KeyTooLong { max: 250 };
        assert_eq!(
            err.to_string(),
            "identity key cannot be more than 250 characters"
        );

        let err = BuildError::UnsupportedField(9);
        assert_eq!(err.to_string(), "key field '9' is not implemented");

        let err = BuildError::ServiceDateOutOfRange(10000);
        assert_eq!(
            err.to_string(),
            "property ServiceDate year 10000 must be between 0 and 9999"
        );
    }
}

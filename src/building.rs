//! Identity key composition.
//!
//! A `KeyBuilder` joins a caller-selected, ordered subset of entity
//! fields into a single delimited key string. Validation is fail-fast
//! in requirement order and no partial key is ever returned.

use crate::errors::{BuildError, Result};
use crate::properties::{KeyField, KeyProperties};
use chrono::Datelike;
use tracing::trace;

/// Maximum composed key length in the canonical configuration.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 250;

/// Separator written between adjacent fields.
pub const DEFAULT_JOIN_CHAR: char = '_';

/// Composes identity keys from ordered field requirements.
///
/// The builder carries only configuration (maximum key length and join
/// character); each call to [`KeyBuilder::build`] is an independent pure
/// computation over caller-owned values, safe to run from any number of
/// threads without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBuilder {
    max_key_length: usize,
    join_char: char,
}

impl KeyBuilder {
    /// Returns a builder with the canonical configuration: 250 character
    /// maximum, `_` separator.
    pub const fn new() -> Self {
        KeyBuilder {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            join_char: DEFAULT_JOIN_CHAR,
        }
    }

    /// Replaces the maximum composed key length.
    ///
    /// The bound is inclusive: a key of exactly this length is valid.
    pub const fn with_max_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }

    /// Replaces the join character written between fields.
    pub const fn with_join_char(mut self, join_char: char) -> Self {
        self.join_char = join_char;
        self
    }

    pub const fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    /// Builds the identity key for `props` from `requirements`.
    ///
    /// Fields are rendered in requirement order and joined by the
    /// configured separator, with no leading or trailing separator. Text
    /// fields are rendered verbatim; a service date is rendered as
    /// zero-padded `YYYYMMDD`. A field listed twice renders its value
    /// twice, with a separator in between.
    ///
    /// # Parameters
    /// * `props` - field values for the entity being keyed
    /// * `requirements` - which fields participate and their left-to-right
    ///   order in the output
    ///
    /// # Returns
    /// * `String` - the composed key
    ///
    /// # Errors
    /// * `BuildError::EmptyRequirements` - if `requirements` is empty
    /// * `BuildError::MissingField` - if a required value is absent or
    ///   empty; the first such field in requirement order is named
    /// * `BuildError::KeyTooLong` - if the composed key would exceed the
    ///   configured maximum length
    /// * `BuildError::ServiceDateOutOfRange` - if a required service date
    ///   has a year outside 0-9999 and so would not render as `YYYYMMDD`
    pub fn build(&self, props: &KeyProperties, requirements: &[KeyField]) -> Result<String> {
        if requirements.is_empty() {
            return Err(BuildError::EmptyRequirements);
        }

        // Pre-pass: validate presence in requirement order and compute the
        // exact output length, so the success path allocates once.
        let key_length = self.composed_length(props, requirements)?;
        if key_length > self.max_key_length {
            return Err(BuildError::KeyTooLong {
                max: self.max_key_length,
            });
        }

        let mut key = String::with_capacity(key_length);
        for &field in requirements {
            // No trailing or leading separator; separator count is one
            // less than the number of fields emitted.
            if !key.is_empty() {
                key.push(self.join_char);
            }
            push_field(&mut key, props, field)?;
        }

        // The pre-pass and the write loop must agree on every field's
        // rendered length, or the single allocation above is wrong.
        debug_assert_eq!(key.len(), key_length);

        trace!(
            fields = requirements.len(),
            length = key.len(),
            "composed identity key"
        );
        Ok(key)
    }

    /// Sums rendered field lengths plus one separator per field, minus the
    /// trailing separator the key does not carry.
    fn composed_length(&self, props: &KeyProperties, requirements: &[KeyField]) -> Result<usize> {
        let sep_len = self.join_char.len_utf8();
        let mut length = 0;
        for &field in requirements {
            length += props.rendered_length(field)? + sep_len;
        }
        Ok(length - sep_len)
    }
}

impl Default for KeyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an identity key with the canonical configuration.
pub fn build_identity_key(props: &KeyProperties, requirements: &[KeyField]) -> Result<String> {
    KeyBuilder::new().build(props, requirements)
}

fn push_field(key: &mut String, props: &KeyProperties, field: KeyField) -> Result<()> {
    match field {
        KeyField::AccountNumber => key.push_str(
            props
                .account_number()
                .ok_or(BuildError::MissingField(field))?,
        ),
        KeyField::SystemCode => {
            key.push_str(props.system_code().ok_or(BuildError::MissingField(field))?);
        }
        KeyField::ExternalId => {
            key.push_str(props.external_id().ok_or(BuildError::MissingField(field))?);
        }
        KeyField::ServiceDate => {
            let date = props
                .service_date()
                .ok_or(BuildError::MissingField(field))?;
            key.push_str(&format!(
                "{:04}{:02}{:02}",
                date.year(),
                date.month(),
                date.day()
            ));
        }
    }
    Ok(())
}

//! Field enumeration and property bag for identity key composition.
//!
//! `KeyField` is the closed set of semantic attributes eligible for
//! inclusion in an identity key; `KeyProperties` carries the actual
//! values for one entity instance. The caller selects which fields
//! participate, and in what order, per build call.

use crate::errors::{BuildError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered length of a service date, always `YYYYMMDD`.
pub const SERVICE_DATE_LENGTH: usize = 8;

/// The fixed set of fields an identity key can be composed from.
///
/// Closed enumeration with explicit discriminants so requirement lists
/// arriving as raw integers (wire values, configuration) can be mapped
/// with `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyField {
    AccountNumber = 1,
    SystemCode = 2,
    ExternalId = 3,
    ServiceDate = 4,
}

impl KeyField {
    /// All fields in discriminant order.
    pub const ALL: [KeyField; 4] = [
        KeyField::AccountNumber,
        KeyField::SystemCode,
        KeyField::ExternalId,
        KeyField::ServiceDate,
    ];

    /// Field name as it appears in error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            KeyField::AccountNumber => "AccountNumber",
            KeyField::SystemCode => "SystemCode",
            KeyField::ExternalId => "ExternalId",
            KeyField::ServiceDate => "ServiceDate",
        }
    }
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for KeyField {
    type Error = BuildError;

    /// Maps a raw discriminant to a field variant.
    ///
    /// # Errors
    /// * `BuildError::UnsupportedField` - if the value does not name a
    ///   known field. This signals a caller contract violation (bad cast),
    ///   not bad entity data.
    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(KeyField::AccountNumber),
            2 => Ok(KeyField::SystemCode),
            3 => Ok(KeyField::ExternalId),
            4 => Ok(KeyField::ServiceDate),
            other => Err(BuildError::UnsupportedField(other)),
        }
    }
}

/// Field values for one entity instance.
///
/// All values are optional; presence is only enforced for the fields a
/// requirement list actually selects. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyProperties {
    account_number: Option<String>,
    system_code: Option<String>,
    external_id: Option<String>,
    service_date: Option<NaiveDate>,
}

impl KeyProperties {
    pub fn new(
        account_number: Option<String>,
        system_code: Option<String>,
        external_id: Option<String>,
        service_date: Option<NaiveDate>,
    ) -> Self {
        KeyProperties {
            account_number,
            system_code,
            external_id,
            service_date,
        }
    }

    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn system_code(&self) -> Option<&str> {
        self.system_code.as_deref()
    }

    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    pub fn service_date(&self) -> Option<NaiveDate> {
        self.service_date
    }

    /// Returns the rendered length of `field` against this bag.
    ///
    /// Text fields contribute their verbatim character count, a present
    /// service date always contributes [`SERVICE_DATE_LENGTH`]. An absent
    /// or empty value is an error, never a zero length, so a missing
    /// field can not be masked by a later length check.
    ///
    /// # Errors
    /// * `BuildError::MissingField` - if the field's value is `None`, or
    ///   empty for a text field.
    /// * `BuildError::ServiceDateOutOfRange` - if the service date's year
    ///   can not be rendered as exactly four digits.
    pub fn rendered_length(&self, field: KeyField) -> Result<usize> {
        let length = match field {
            KeyField::AccountNumber => self.account_number().map_or(0, str::len),
            KeyField::SystemCode => self.system_code().map_or(0, str::len),
            KeyField::ExternalId => self.external_id().map_or(0, str::len),
            KeyField::ServiceDate => match self.service_date {
                // A year outside 0-9999 would not render as 4 digits, so
                // the YYYYMMDD length invariant would not hold.
                Some(date) if !(0..=9999).contains(&date.year()) => {
                    return Err(BuildError::ServiceDateOutOfRange(date.year()));
                }
                Some(_) => SERVICE_DATE_LENGTH,
                None => 0,
            },
        };

        if length == 0 {
            return Err(BuildError::MissingField(field));
        }

        Ok(length)
    }
}

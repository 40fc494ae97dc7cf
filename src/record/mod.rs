//! Record Module
//!
//! The Contact type and its on-disk codec.
//!
//! ## Responsibilities
//! - Define the Contact record
//! - Encode a Contact into a comma-delimited payload
//! - Decode a payload back into a Contact
//!
//! ## Payload Format
//! ```text
//! firstName,lastName,address,phoneNumber
//! ```
//! The first three fields must not contain commas or newlines. The phone
//! number field runs to the end of the payload, so commas embedded in it
//! survive a round trip.

mod codec;

pub use codec::{decode, encode};

/// A single contact record
///
/// Instances are transient: constructed, encoded into the log, and
/// reconstructed on lookup. Equality is field-wise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
        }
    }

    /// The key used by the name index: lowercased first and last name
    /// joined by a single space.
    ///
    /// Lowercasing happens on both insert and lookup, so name search is
    /// case-insensitive.
    pub fn name_key(&self) -> String {
        format!(
            "{} {}",
            self.first_name.to_lowercase(),
            self.last_name.to_lowercase()
        )
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Contact{{firstName='{}', lastName='{}', address='{}', phoneNumber='{}'}}",
            self.first_name, self.last_name, self.address, self.phone_number
        )
    }
}

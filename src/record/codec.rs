//! Record codec
//!
//! Encoding and decoding between a Contact and its log payload.
//!
//! ## Payload Format
//! ```text
//! ┌───────────┬───┬──────────┬───┬─────────┬───┬──────────────┐
//! │ firstName │ , │ lastName │ , │ address │ , │ phoneNumber  │
//! └───────────┴───┴──────────┴───┴─────────┴───┴──────────────┘
//! ```
//!
//! Decoding splits at the first three commas only; everything after the
//! third comma belongs to the phone number. Leading whitespace on each
//! field is stripped on decode, so round-tripping is exact only for
//! contacts without leading whitespace in their fields.

use crate::error::{DexError, Result};
use super::Contact;

/// Encode a contact into a log payload
pub fn encode(contact: &Contact) -> Vec<u8> {
    let mut payload = Vec::with_capacity(
        contact.first_name.len()
            + contact.last_name.len()
            + contact.address.len()
            + contact.phone_number.len()
            + 3,
    );
    payload.extend_from_slice(contact.first_name.as_bytes());
    payload.push(b',');
    payload.extend_from_slice(contact.last_name.as_bytes());
    payload.push(b',');
    payload.extend_from_slice(contact.address.as_bytes());
    payload.push(b',');
    payload.extend_from_slice(contact.phone_number.as_bytes());
    payload
}

/// Decode a log payload into a contact
///
/// Fails with `DexError::Decode` if the payload is not UTF-8 or holds
/// fewer than three commas.
pub fn decode(payload: &[u8]) -> Result<Contact> {
    let text = std::str::from_utf8(payload)
        .map_err(|e| DexError::Decode(format!("payload is not valid UTF-8: {}", e)))?;

    let mut fields = text.splitn(4, ',');

    let first_name = fields.next();
    let last_name = fields.next();
    let address = fields.next();
    let phone_number = fields.next();

    match (first_name, last_name, address, phone_number) {
        (Some(first_name), Some(last_name), Some(address), Some(phone_number)) => {
            Ok(Contact {
                first_name: first_name.trim_start().to_string(),
                last_name: last_name.trim_start().to_string(),
                address: address.trim_start().to_string(),
                phone_number: phone_number.trim_start().to_string(),
            })
        }
        _ => Err(DexError::Decode(format!(
            "expected 3 field delimiters, got {}",
            text.matches(',').count()
        ))),
    }
}

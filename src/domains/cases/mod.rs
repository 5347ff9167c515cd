//! Cases domain module.
//!
//! A case is created on every `POST /cases`. Its payload is not retained:
//! the backend only issues an identifier and a status URL derived from it.

use serde::{Deserialize, Serialize};

/// Length of generated case ids.
pub const CASE_ID_LENGTH: usize = 10;

/// Alphabet case ids are drawn from (URL-safe).
pub const CASE_ID_ALPHABET: [char; 64] = nanoid::alphabet::SAFE;

/// Generate a new random case id.
///
/// Ids are not tracked anywhere; uniqueness rests on the collision odds of
/// 10 characters over a 64-symbol alphabet.
pub fn generate_case_id() -> String {
    nanoid::nanoid!(CASE_ID_LENGTH, &CASE_ID_ALPHABET)
}

/// Response to a case creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReceipt {
    /// Generated case id.
    pub case_id: String,

    /// URL where the case status can be looked up.
    pub status_url: String,
}

impl CaseReceipt {
    /// Issue a receipt for a freshly generated case id.
    pub fn issue(status_url_prefix: &str) -> Self {
        Self::for_id(generate_case_id(), status_url_prefix)
    }

    /// Build a receipt for a known id.
    pub fn for_id(case_id: impl Into<String>, status_url_prefix: &str) -> Self {
        let case_id = case_id.into();
        Self {
            status_url: format!("{}{}", status_url_prefix, case_id),
            case_id,
        }
    }
}

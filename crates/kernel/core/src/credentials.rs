//! Account password comparison under the configured storage scheme.

use sha1::{Digest, Sha1};

/// How account passwords are stored.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PasswordScheme {
    /// Stored verbatim.
    Plain,
    /// Stored as a lowercase hex SHA-1 digest.
    #[default]
    Sha1,
}

impl PasswordScheme {
    /// Transforms `plain` into its stored form.
    pub fn hash(self, plain: &str) -> String {
        match self {
            PasswordScheme::Plain => plain.to_owned(),
            PasswordScheme::Sha1 => hex::encode(Sha1::digest(plain.as_bytes())),
        }
    }

    /// True when `plain` hashes to `stored` under this scheme.
    pub fn verify(self, plain: &str, stored: &str) -> bool {
        self.hash(plain) == stored
    }
}

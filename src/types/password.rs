use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Stored form of a password: padded standard base64 over its UTF-8 bytes.
///
/// This is an encoding, not a hash. Anyone holding the `auth` table can
/// recover every plaintext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPassword(String);

impl EncodedPassword {
    pub fn encode(plaintext: &str) -> Self {
        Self(STANDARD.encode(plaintext.as_bytes()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Byte-for-byte comparison against a stored value; a NULL column never matches.
    pub fn matches(&self, stored: Option<&str>) -> bool {
        stored.is_some_and(|s| s.as_bytes() == self.0.as_bytes())
    }
}

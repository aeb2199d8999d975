use std::fmt;

use sha2::{Digest, Sha256};

/// Cache address derived from an operation name and its inputs.
///
/// Fields are length-prefixed before hashing so `("ab", "c")` and `("a", "bc")`
/// never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(operation: &str, text: &str, language: Option<&str>) -> Self {
        let mut hasher = Sha256::new();
        for part in [Some(operation), Some(text), language].into_iter().flatten() {
            hasher.update((part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }
        Self(format!("{operation}:{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

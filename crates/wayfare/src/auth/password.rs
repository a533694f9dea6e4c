//! Password digests for configured accounts
//!
//! Config files carry hex-encoded SHA-256 digests rather than cleartext
//! passwords.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a password
pub fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Check a presented password against a stored digest
pub fn verify(password: &str, digest_hex: &str) -> bool {
    sha256_hex(password).eq_ignore_ascii_case(digest_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        // sha256("hunter2")
        assert_eq!(
            sha256_hex("hunter2"),
            "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7"
        );
    }

    #[test]
    fn verify_accepts_either_hex_case() {
        let digest = sha256_hex("hunter2").to_uppercase();
        assert!(verify("hunter2", &digest));
        assert!(!verify("hunter3", &digest));
    }
}

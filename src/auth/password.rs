/**
 * Password Hashing
 *
 * One-way credential hashing and verification using bcrypt. Each hash embeds
 * its own random salt, so hashing the same password twice yields different
 * strings; verification re-derives the hash from the embedded parameters.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plain-text password with bcrypt
///
/// # Arguments
///
/// * `password` - The plain-text password to hash
///
/// # Returns
///
/// The bcrypt hash string, or an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a plain-text password against a stored bcrypt hash
///
/// Returns `true` only when the password reproduces the stored hash. A wrong
/// password is not an error; a malformed hash also verifies as `false`.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    verify(password, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("Sup3rSecret!").unwrap();
        let second = hash_password("Sup3rSecret!").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_correct_password() {
        let hashed = hash_password("Sup3rSecret!").unwrap();
        assert!(verify_password("Sup3rSecret!", &hashed));
    }

    #[test]
    fn test_verify_wrong_password() {
        let hashed = hash_password("Sup3rSecret!").unwrap();
        assert!(!verify_password("WrongPassword1!", &hashed));
    }

    #[test]
    fn test_verify_malformed_hash() {
        assert!(!verify_password("Sup3rSecret!", "not-a-bcrypt-hash"));
    }
}

//! Random password generation.

use rand::Rng;
use zeroize::Zeroizing;

use crate::errors::{PwVaultError, Result};

/// Characters a generated password is drawn from.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789\
!#$%&()*+,-./:;<=>?@[]^_{|}~";

/// Generate a password of `length` characters, each drawn uniformly
/// from letters, digits, and punctuation.
pub fn generate_password(length: usize) -> Result<Zeroizing<String>> {
    if length == 0 {
        return Err(PwVaultError::CommandFailed(
            "password length must be at least 1".into(),
        ));
    }

    let mut rng = rand::rng();
    let mut password = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        password.push(char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]));
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_requested_length() {
        assert_eq!(generate_password(1).unwrap().len(), 1);
        assert_eq!(generate_password(20).unwrap().len(), 20);
        assert_eq!(generate_password(128).unwrap().len(), 128);
    }

    #[test]
    fn uses_only_alphabet_characters() {
        let pw = generate_password(256).unwrap();
        assert!(pw.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn zero_length_rejected() {
        assert!(generate_password(0).is_err());
    }

    #[test]
    fn successive_passwords_differ() {
        let a = generate_password(32).unwrap();
        let b = generate_password(32).unwrap();
        assert_ne!(*a, *b);
    }
}

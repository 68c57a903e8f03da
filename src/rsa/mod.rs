//! Textbook RSA: key generation, encryption and decryption of integers

pub mod keygen;

pub use keygen::{generate_keypair, RsaPrivateKey, RsaPublicKey};

use crate::crypto::mod_pow;
use crate::error::{CipherError, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Compute c = m^e mod n; `m` must be a residue mod n
pub fn encrypt(m: &BigUint, key: &RsaPublicKey) -> Result<BigUint> {
    if m >= &key.n {
        return Err(CipherError::MessageTooLarge {
            m: m.clone(),
            n: key.n.clone(),
        });
    }
    Ok(mod_pow(m, &key.e, &key.n))
}

/// Compute m = c^d mod n
pub fn decrypt(c: &BigUint, key: &RsaPrivateKey) -> Result<BigUint> {
    if key.n.is_zero() {
        return Err(CipherError::InvalidNumber {
            field: "n",
            value: key.n.to_string(),
        });
    }
    Ok(mod_pow(c, &key.d, &key.n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_encrypt_decrypt() {
        let keypair = generate_keypair(&big(3), &big(11)).unwrap();
        let c = encrypt(&big(5), &keypair.public_key()).unwrap();
        assert_eq!(c, big(26));
        assert_eq!(decrypt(&c, &keypair.private_key()).unwrap(), big(5));
    }

    #[test]
    fn test_every_residue_round_trips() {
        let keypair = generate_keypair(&big(61), &big(53)).unwrap();
        let (public, private) = (keypair.public_key(), keypair.private_key());
        for m in (0u64..3233).step_by(17) {
            let c = encrypt(&big(m), &public).unwrap();
            assert_eq!(decrypt(&c, &private).unwrap(), big(m));
        }
    }

    #[test]
    fn test_message_too_large() {
        let key = RsaPublicKey { e: big(3), n: big(33) };
        assert_eq!(
            encrypt(&big(33), &key),
            Err(CipherError::MessageTooLarge { m: big(33), n: big(33) })
        );
        assert!(encrypt(&big(34), &key).is_err());
        assert!(encrypt(&big(32), &key).is_ok());
    }

    #[test]
    fn test_explicit_key_fields() {
        // keys typed in by hand rather than generated
        let c = encrypt(&big(65), &RsaPublicKey { e: big(17), n: big(3233) }).unwrap();
        assert_eq!(c, big(2790));
        let m = decrypt(&c, &RsaPrivateKey { d: big(2753), n: big(3233) }).unwrap();
        assert_eq!(m, big(65));
    }

    #[test]
    fn test_decrypt_unbounded_ciphertext() {
        let key = RsaPrivateKey { d: big(7), n: big(33) };
        assert_eq!(
            decrypt(&big(26 + 33), &key).unwrap(),
            decrypt(&big(26), &key).unwrap()
        );
    }

    #[test]
    fn test_zero_modulus() {
        let key = RsaPrivateKey { d: big(7), n: big(0) };
        assert!(matches!(decrypt(&big(1), &key), Err(CipherError::InvalidNumber { .. })));
        let key = RsaPublicKey { e: big(3), n: big(0) };
        assert!(matches!(encrypt(&big(0), &key), Err(CipherError::MessageTooLarge { .. })));
    }
}

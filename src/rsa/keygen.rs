//! RSA key generation from two small primes

use crate::crypto::{gcd_big, is_prime, mod_inverse};
use crate::error::{CipherError, Result};
use num_bigint::BigUint;
use num_traits::One;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: BigUint, // Public exponent
    pub n: BigUint, // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: BigUint, // Private exponent
    pub n: BigUint, // Modulus (same as public)
}

/// Everything computed by [`generate_keypair`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub p: BigUint,
    pub q: BigUint,
    pub n: BigUint,
    pub phi: BigUint,
    pub e: BigUint,
    pub d: BigUint,
}

impl RsaKeyPair {
    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            e: self.e.clone(),
            n: self.n.clone(),
        }
    }

    pub fn private_key(&self) -> RsaPrivateKey {
        RsaPrivateKey {
            d: self.d.clone(),
            n: self.n.clone(),
        }
    }
}

/// Smallest e >= 2 below `phi` that is coprime with it
fn public_exponent(phi: &BigUint) -> Result<BigUint> {
    let mut e = BigUint::from(2u8);
    while &e < phi {
        if gcd_big(&e, phi).is_one() {
            return Ok(e);
        }
        e += 1u8;
    }
    Err(CipherError::InvalidKey(format!(
        "no public exponent 2 <= e < {} is coprime with φ(n)",
        phi
    )))
}

/// Generate RSA key pair from primes `p` and `q`
pub fn generate_keypair(p: &BigUint, q: &BigUint) -> Result<RsaKeyPair> {
    if !is_prime(p) || !is_prime(q) {
        return Err(CipherError::InvalidKey(
            "p and q must both be prime numbers".to_string(),
        ));
    }
    if p == q {
        return Err(CipherError::InvalidKey("p and q must be distinct".to_string()));
    }

    // Step 1: n = p * q
    let n = p * q;

    // Step 2: φ(n) = (p-1)(q-1)
    let phi = (p - 1u8) * (q - 1u8);

    // Step 3: e, then d = e^(-1) mod φ(n)
    let e = public_exponent(&phi)?;
    let d = mod_inverse(&e, &phi)?;

    Ok(RsaKeyPair {
        p: p.clone(),
        q: q.clone(),
        n,
        phi,
        e,
        d,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_textbook_key() {
        let keypair = generate_keypair(&big(3), &big(11)).unwrap();
        assert_eq!(keypair.n, big(33));
        assert_eq!(keypair.phi, big(20));
        assert_eq!(keypair.e, big(3));
        assert_eq!(keypair.d, big(7));
    }

    #[test]
    fn test_key_properties() {
        let keypair = generate_keypair(&big(61), &big(53)).unwrap();
        assert_eq!(keypair.n, big(3233));
        assert_eq!(keypair.phi, big(3120));
        // 3120 = 2^4 * 3 * 5 * 13, so 7 is the first coprime candidate
        assert_eq!(keypair.e, big(7));
        assert_eq!((&keypair.e * &keypair.d) % &keypair.phi, big(1));
        assert_eq!(keypair.public_key(), RsaPublicKey { e: big(7), n: big(3233) });
        assert_eq!(keypair.private_key().n, big(3233));
    }

    #[test]
    fn test_rejects_composite() {
        assert!(matches!(
            generate_keypair(&big(4), &big(11)),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            generate_keypair(&big(3), &big(1)),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_rejects_equal_primes() {
        assert!(matches!(
            generate_keypair(&big(7), &big(7)),
            Err(CipherError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_no_public_exponent() {
        // φ = 2 leaves no candidate e in [2, φ)
        assert!(matches!(
            generate_keypair(&big(2), &big(3)),
            Err(CipherError::InvalidKey(_))
        ));
        let keypair = generate_keypair(&big(2), &big(5)).unwrap();
        assert_eq!(keypair.e, big(3));
        assert_eq!(keypair.d, big(3));
    }
}

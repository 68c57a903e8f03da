//! Alphabet codec and modular arithmetic shared by every cipher

pub mod alphabet;

pub use alphabet::{clean_text, letter_to_char, letters_to_text, text_to_letters, ALPHABET_LEN};

use crate::error::{CipherError, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Mathematical modulo: the result is always in `[0, m)`, also for negative `n`.
///
/// `m` must be positive.
pub fn norm_mod(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}

/// Greatest common divisor (Euclid)
///
/// Unsigned so that `gcd(i64::MIN, 0) = 2^63` is representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Modular inverse by linear search over `1..m`.
///
/// Only meant for tiny moduli such as the alphabet size. Use [`mod_inverse`]
/// for anything that can grow, e.g. an RSA totient.
pub fn mod_inverse_small(a: i64, m: i64) -> Result<i64> {
    if m > 0 {
        let a = norm_mod(a, m);
        for x in 1..m {
            if norm_mod(a * x, m) == 1 {
                return Ok(x);
            }
        }
    }
    Err(CipherError::NoInverseExists {
        a: a.to_string(),
        m: m.to_string(),
    })
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }
    let (q, r) = a.div_mod_floor(b);
    let (g, x1, y1) = extended_gcd(b, &r);
    let y = x1 - q * &y1;
    (g, y1, y)
}

/// Calculate modular multiplicative inverse using Extended Euclidean Algorithm
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let no_inverse = || CipherError::NoInverseExists {
        a: a.to_string(),
        m: m.to_string(),
    };
    if m.is_zero() {
        return Err(no_inverse());
    }

    let a_int = BigInt::from(a.clone());
    let m_int = BigInt::from(m.clone());
    let (g, x, _) = extended_gcd(&a_int, &m_int);
    if !g.is_one() {
        return Err(no_inverse());
    }

    // Convert result to positive value in range [0, m)
    x.mod_floor(&m_int).to_biguint().ok_or_else(no_inverse)
}

/// Greatest common divisor of two big integers
pub fn gcd_big(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Trial-division primality test.
///
/// Fine for demonstration-sized primes only; there is no probabilistic test.
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u8);
    if n < &two {
        return false;
    }
    let mut i = two;
    while &i * &i <= *n {
        if (n % &i).is_zero() {
            return false;
        }
        i += 1u8;
    }
    true
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
///
/// `modulus` must be non-zero.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        exp >>= 1;
        base = (&base * &base) % modulus;
    }

    result
}

//! Field modulus and scalar arithmetic.
//!
//! Scalars are stored as `u32` and multiplied in `u64`, so no
//! intermediate product can overflow for any modulus that fits in `u32`.
//!
//! ```
//! use rust_spotit::core::Modulus;
//!
//! let p = Modulus::new(7).unwrap();
//! assert_eq!(p.plane_order().unwrap(), 57);
//! assert_eq!(p.card_size(), 8);
//! assert!(Modulus::new(4).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::PlaneError;

/// Modulus `p` of the coordinate ring `Z/pZ`.
///
/// Built with [`Modulus::new`] the value is guaranteed prime, which makes
/// the ring a field and the generated plane a real `PG(2,p)`. Deserializing
/// goes through the same check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Modulus(u32);

impl Modulus {
    /// Create a validated prime modulus.
    pub fn new(p: u32) -> Result<Self, PlaneError> {
        if p < 2 {
            return Err(PlaneError::InvalidModulus {
                modulus: p,
                reason: "must be at least 2",
            });
        }
        if !is_prime(p) {
            return Err(PlaneError::InvalidModulus {
                modulus: p,
                reason: "not prime",
            });
        }
        Ok(Self(p))
    }

    /// Create a modulus without the primality check.
    ///
    /// Generation over a composite modulus does not produce a projective
    /// plane. Only `p >= 1` is enforced, since reduction by zero is undefined.
    pub fn new_unchecked(p: u32) -> Result<Self, PlaneError> {
        if p == 0 {
            return Err(PlaneError::InvalidModulus {
                modulus: p,
                reason: "must be at least 1",
            });
        }
        Ok(Self(p))
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of points (and lines) in `PG(2,p)`: `p² + p + 1`.
    ///
    /// Fails once the count no longer fits a `u32` symbol index. Memory is
    /// the practical limit well before that: a deck holds `(p² + p + 1)(p + 1)`
    /// symbols, about 2.4 GB of indices at `p = 1021`.
    pub fn plane_order(self) -> Result<usize, PlaneError> {
        let p = self.0 as usize;
        p.checked_mul(p)
            .and_then(|sq| sq.checked_add(p))
            .and_then(|n| n.checked_add(1))
            .filter(|&n| u32::try_from(n).is_ok())
            .ok_or(PlaneError::ArithmeticOverflow { modulus: self.0 })
    }

    /// Number of points on every line: `p + 1`.
    #[must_use]
    pub fn card_size(self) -> usize {
        self.0 as usize + 1
    }

    /// Reduce a scalar into `[0, p)`.
    #[must_use]
    pub fn reduce(self, value: u32) -> u32 {
        value % self.0
    }

    /// `a * b mod p`.
    #[must_use]
    pub fn mul(self, a: u32, b: u32) -> u32 {
        ((u64::from(a) * u64::from(b)) % u64::from(self.0)) as u32
    }

    /// `a + b mod p`.
    #[must_use]
    pub fn add(self, a: u32, b: u32) -> u32 {
        ((u64::from(a) + u64::from(b)) % u64::from(self.0)) as u32
    }

    /// `a - b mod p`.
    #[must_use]
    pub fn sub(self, a: u32, b: u32) -> u32 {
        let p = u64::from(self.0);
        ((u64::from(a) % p + p - u64::from(b) % p) % p) as u32
    }

    /// Multiplicative inverse of `a`, if it exists.
    ///
    /// Uses the extended Euclidean algorithm, so it also answers correctly
    /// for composite moduli (where non-units have no inverse).
    #[must_use]
    pub fn inverse(self, a: u32) -> Option<u32> {
        let p = i64::from(self.0);
        let (mut r0, mut r1) = (p, i64::from(a) % p);
        let (mut t0, mut t1) = (0i64, 1i64);
        while r1 != 0 {
            let q = r0 / r1;
            (r0, r1) = (r1, r0 - q * r1);
            (t0, t1) = (t1, t0 - q * t1);
        }
        if r0 != 1 {
            return None;
        }
        Some(t0.rem_euclid(p) as u32)
    }
}

impl std::fmt::Display for Modulus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mod {}", self.0)
    }
}

impl TryFrom<u32> for Modulus {
    type Error = PlaneError;

    fn try_from(p: u32) -> Result<Self, Self::Error> {
        Self::new(p)
    }
}

impl From<Modulus> for u32 {
    fn from(modulus: Modulus) -> u32 {
        modulus.0
    }
}

fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = u64::from(n);
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_primes() {
        for p in [2, 3, 5, 7, 11, 13, 97] {
            let m = Modulus::new(p).unwrap();
            assert_eq!(m.get(), p);
        }
    }

    #[test]
    fn test_rejects_composites_and_small() {
        for p in [0, 1, 4, 6, 9, 15, 49] {
            assert!(matches!(
                Modulus::new(p),
                Err(PlaneError::InvalidModulus { modulus, .. }) if modulus == p
            ));
        }
    }

    #[test]
    fn test_unchecked() {
        let m = Modulus::new_unchecked(4).unwrap();
        assert_eq!(m.get(), 4);
        assert!(Modulus::new_unchecked(0).is_err());
        assert!(Modulus::new_unchecked(1).is_ok());
    }

    #[test]
    fn test_plane_order() {
        assert_eq!(Modulus::new(2).unwrap().plane_order().unwrap(), 7);
        assert_eq!(Modulus::new(3).unwrap().plane_order().unwrap(), 13);
        assert_eq!(Modulus::new(7).unwrap().plane_order().unwrap(), 57);
    }

    #[test]
    fn test_plane_order_overflow() {
        let m = Modulus::new(4_294_967_291).unwrap();
        assert_eq!(
            m.plane_order(),
            Err(PlaneError::ArithmeticOverflow {
                modulus: 4_294_967_291
            })
        );
    }

    #[test]
    fn test_arithmetic() {
        let m = Modulus::new(7).unwrap();
        assert_eq!(m.mul(3, 5), 1);
        assert_eq!(m.add(6, 6), 5);
        assert_eq!(m.sub(2, 5), 4);
        assert_eq!(m.reduce(15), 1);
    }

    #[test]
    fn test_wide_products_do_not_overflow() {
        let m = Modulus::new(4_294_967_291).unwrap();
        let a = m.get() - 1;
        // (-1) * (-1) == 1
        assert_eq!(m.mul(a, a), 1);
        assert_eq!(m.sub(0, a), 1);
    }

    #[test]
    fn test_inverse() {
        let m = Modulus::new(7).unwrap();
        for a in 1..7 {
            let inv = m.inverse(a).unwrap();
            assert_eq!(m.mul(a, inv), 1);
        }
        assert_eq!(m.inverse(0), None);

        let composite = Modulus::new_unchecked(4).unwrap();
        assert_eq!(composite.inverse(2), None);
        assert_eq!(composite.inverse(3), Some(3));
    }

    #[test]
    fn test_serde_validates() {
        let m: Modulus = serde_json::from_str("7").unwrap();
        assert_eq!(m.get(), 7);
        assert_eq!(serde_json::to_string(&m).unwrap(), "7");

        assert!(serde_json::from_str::<Modulus>("4").is_err());
        assert!(serde_json::from_str::<Modulus>("1").is_err());
        assert!(serde_json::from_str::<Modulus>("0").is_err());
    }
}

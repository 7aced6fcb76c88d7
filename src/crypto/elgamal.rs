//! ElGamal encryption.
//!
//! Raw operations over the externally supplied group parameters.  As
//! with RSA, padding is the caller's concern.

use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

use crate::{Error, Result};
use crate::crypto::mpi::{MPI, ProtectedMPI};

/// Computes `m = c2 * c1^(p - 1 - x) mod p`.
///
/// `c1^(p - 1 - x)` is the inverse of `c1^x` by Fermat's little
/// theorem; `p` must be prime for the key to be valid at all, so no
/// separate modular inversion is needed.
pub fn decrypt(p: &MPI, x: &ProtectedMPI, c1: &MPI, c2: &MPI)
               -> Result<ProtectedMPI>
{
    let p = p.to_biguint();
    if p.bits() < 2 {
        return Err(Error::Bug("invalid ElGamal modulus"));
    }
    let pm1 = &p - 1u32;
    let x = x.to_biguint();
    if x >= pm1 {
        return Err(Error::Bug("invalid ElGamal secret exponent"));
    }

    let t = c1.to_biguint().modpow(&(pm1 - x), &p);
    let m = (c2.to_biguint() * t) % &p;
    Ok(ProtectedMPI::from(&m))
}

/// Computes `c1 = g^k mod p`, `c2 = m * y^k mod p` for a fresh
/// ephemeral `k`.
pub fn encrypt<R>(p: &MPI, g: &MPI, y: &MPI, m: &ProtectedMPI,
                  rng: &mut R)
                  -> Result<(MPI, MPI)>
    where R: Rng,
{
    let p = p.to_biguint();
    if p.bits() < 4 {
        return Err(Error::Bug("invalid ElGamal modulus"));
    }
    if m.to_biguint() >= p {
        return Err(Error::Bug("message too long for key"));
    }

    // Ephemeral exponent in [2, p - 2].
    let k = BigUint::from(2u32) + rng.gen_biguint_below(&(&p - 3u32));

    let c1 = g.to_biguint().modpow(&k, &p);
    let c2 = (m.to_biguint() * y.to_biguint().modpow(&k, &p)) % &p;
    Ok((MPI::from(&c1), MPI::from(&c2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_group_roundtrip() {
        // p = 467 (prime), g = 2, x = 127, y = 2^127 mod 467 = 132.
        let p = MPI::new(&[0x01, 0xd3]);
        let g = MPI::new(&[2]);
        let x = ProtectedMPI::new(&[127]);
        let y = MPI::new(&[132]);

        let mut rng = rand::thread_rng();
        let m = ProtectedMPI::new(&[231]);
        let (c1, c2) = encrypt(&p, &g, &y, &m, &mut rng).unwrap();
        let back = decrypt(&p, &x, &c1, &c2).unwrap();
        assert_eq!(back.value(), m.value());
    }

    #[test]
    fn oversized_message_is_a_bug() {
        let p = MPI::new(&[0x01, 0xd3]);
        let g = MPI::new(&[2]);
        let y = MPI::new(&[132]);
        let mut rng = rand::thread_rng();
        assert!(matches!(
            encrypt(&p, &g, &y, &ProtectedMPI::new(&[0x01, 0xd3]),
                    &mut rng),
            Err(Error::Bug(_))));
    }
}

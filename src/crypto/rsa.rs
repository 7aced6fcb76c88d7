//! The raw RSA operation.
//!
//! Textbook modular exponentiation over the externally supplied key
//! material.  Padding is handled by the caller; these functions know
//! nothing about the structure of the plaintext.

use crate::{Error, Result};
use crate::crypto::mpi::{MPI, ProtectedMPI};

/// Computes `c^d mod n`.
///
/// The returned plaintext integer holds key material; its buffer is
/// zeroized on drop.
pub fn decrypt(n: &MPI, d: &ProtectedMPI, c: &MPI) -> Result<ProtectedMPI> {
    if n.bits() == 0 {
        return Err(Error::Bug("zero RSA modulus"));
    }
    let m = c.to_biguint().modpow(&d.to_biguint(), &n.to_biguint());
    Ok(ProtectedMPI::from(&m))
}

/// Computes `m^e mod n`.
pub fn encrypt(n: &MPI, e: &MPI, m: &ProtectedMPI) -> Result<MPI> {
    if n.bits() == 0 {
        return Err(Error::Bug("zero RSA modulus"));
    }
    let c = m.to_biguint().modpow(&e.to_biguint(), &n.to_biguint());
    Ok(MPI::from(&c))
}

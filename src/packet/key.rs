//! Recipient decryption keys.

use crate::{Error, Result};
use crate::crypto::mpi::{MPI, ProtectedMPI};
use crate::keyid::KeyID;
use crate::types::PublicKeyAlgorithm;

/// Algorithm-specific secret key material.
///
/// The secret components are [`ProtectedMPI`]s and are therefore
/// zeroized when the key is dropped.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum SecretKeyMaterial {
    /// RSA key material.
    Rsa {
        /// Public modulus.
        n: MPI,
        /// Public encryption exponent.
        e: MPI,
        /// Secret decryption exponent.
        d: ProtectedMPI,
    },
    /// ElGamal key material.
    ElGamal {
        /// Prime modulus of the group.
        p: MPI,
        /// Group generator.
        g: MPI,
        /// Public value, `g^x mod p`.
        y: MPI,
        /// Secret exponent.
        x: ProtectedMPI,
    },
}

assert_send_and_sync!(SecretKeyMaterial);

/// A recipient's decryption key.
///
/// Immutable for the duration of a decryption; the session-key
/// decryptor only ever borrows it.
#[derive(Clone, Debug)]
pub struct SecretKey {
    keyid: KeyID,
    pk_algo: PublicKeyAlgorithm,
    material: SecretKeyMaterial,
}

assert_send_and_sync!(SecretKey);

impl SecretKey {
    /// Creates a new key.
    ///
    /// `pk_algo` is the algorithm the key was issued for; for RSA
    /// material both [`PublicKeyAlgorithm::RSAEncryptSign`] and the
    /// deprecated [`PublicKeyAlgorithm::RSAEncrypt`] are admissible.
    /// An algorithm that does not match the material is caller
    /// misuse and yields [`Error::Bug`].
    pub fn new(keyid: KeyID, pk_algo: PublicKeyAlgorithm,
               material: SecretKeyMaterial)
               -> Result<Self>
    {
        use PublicKeyAlgorithm::*;
        match (pk_algo, &material) {
            (RSAEncryptSign, SecretKeyMaterial::Rsa { n, .. })
                | (RSAEncrypt, SecretKeyMaterial::Rsa { n, .. }) =>
                if n.bits() == 0 {
                    return Err(Error::Bug("zero RSA modulus"));
                },
            (ElGamalEncrypt, SecretKeyMaterial::ElGamal { p, .. }) =>
                if p.bits() == 0 {
                    return Err(Error::Bug("zero ElGamal modulus"));
                },
            _ => return Err(
                Error::Bug("algorithm does not match key material")),
        }

        Ok(SecretKey {
            keyid,
            pk_algo,
            material,
        })
    }

    /// Returns the key's identifier.
    pub fn keyid(&self) -> &KeyID {
        &self.keyid
    }

    /// Returns the key's public-key algorithm.
    pub fn pk_algo(&self) -> PublicKeyAlgorithm {
        self.pk_algo
    }

    /// Returns the key's material.
    pub fn material(&self) -> &SecretKeyMaterial {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rsa_material() -> SecretKeyMaterial {
        SecretKeyMaterial::Rsa {
            n: MPI::new(&[0x0c, 0xa1]),
            e: MPI::new(&[17]),
            d: ProtectedMPI::new(&[0x01, 0x9d]),
        }
    }

    #[test]
    fn consistent_material() {
        assert!(SecretKey::new(KeyID::from(1u64),
                               PublicKeyAlgorithm::RSAEncryptSign,
                               rsa_material()).is_ok());
        assert!(SecretKey::new(KeyID::from(1u64),
                               PublicKeyAlgorithm::RSAEncrypt,
                               rsa_material()).is_ok());
    }

    #[test]
    fn mismatched_material() {
        assert!(matches!(
            SecretKey::new(KeyID::from(1u64),
                           PublicKeyAlgorithm::ElGamalEncrypt,
                           rsa_material()),
            Err(Error::Bug(_))));
        assert!(matches!(
            SecretKey::new(KeyID::from(1u64),
                           PublicKeyAlgorithm::Unknown(42),
                           rsa_material()),
            Err(Error::Bug(_))));
    }

    #[test]
    fn zero_modulus() {
        let material = SecretKeyMaterial::Rsa {
            n: MPI::new(&[]),
            e: MPI::new(&[17]),
            d: ProtectedMPI::new(&[3]),
        };
        assert!(matches!(
            SecretKey::new(KeyID::from(1u64),
                           PublicKeyAlgorithm::RSAEncryptSign,
                           material),
            Err(Error::Bug(_))));
    }
}

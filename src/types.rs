//! Primitive types.

use std::fmt;

/// Marker trait for types we claim are Send.
///
/// See the `assert_send_and_sync!` macro: implementing this trait
/// for a type that is not Send is a compile error.
pub(crate) trait Sendable: Send {}
/// Marker trait for types we claim are Sync.
pub(crate) trait Syncable: Sync {}

/// The OpenPGP public-key algorithms we can dispatch on.
///
/// See [Section 9.1 of RFC 4880].  Only the encryption-capable
/// algorithms the session-key decryptor understands are enumerated;
/// everything else is `Unknown`.
///
///   [Section 9.1 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-9.1
#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PublicKeyAlgorithm {
    /// RSA (Encrypt or Sign)
    RSAEncryptSign,
    /// RSA Encrypt-Only, deprecated in RFC 4880.
    RSAEncrypt,
    /// ElGamal (Encrypt-Only)
    ElGamalEncrypt,
    /// Unknown algorithm identifier.
    Unknown(u8),
}

impl From<u8> for PublicKeyAlgorithm {
    fn from(u: u8) -> Self {
        use PublicKeyAlgorithm::*;
        match u {
            1 => RSAEncryptSign,
            2 => RSAEncrypt,
            16 => ElGamalEncrypt,
            u => Unknown(u),
        }
    }
}

impl From<PublicKeyAlgorithm> for u8 {
    fn from(p: PublicKeyAlgorithm) -> u8 {
        use PublicKeyAlgorithm::*;
        match p {
            RSAEncryptSign => 1,
            RSAEncrypt => 2,
            ElGamalEncrypt => 16,
            Unknown(u) => u,
        }
    }
}

impl fmt::Display for PublicKeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use PublicKeyAlgorithm::*;
        match self {
            RSAEncryptSign => f.write_str("RSA (Encrypt or Sign)"),
            RSAEncrypt => f.write_str("RSA Encrypt-Only"),
            ElGamalEncrypt => f.write_str("ElGamal (Encrypt-Only)"),
            Unknown(u) =>
                write!(f, "Unknown public-key algorithm {}", u),
        }
    }
}

/// The symmetric-key algorithms as defined in [Section 9.2 of RFC 4880].
///
/// A decrypted session-key packet names one of these; this crate does
/// not implement the ciphers themselves, it merely hands the
/// identifier and key to the caller.
///
///   [Section 9.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-9.2
#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SymmetricAlgorithm {
    /// Null encryption.
    Unencrypted,
    /// IDEA block cipher.
    IDEA,
    /// 3-DES in EDE configuration.
    TripleDES,
    /// CAST5/CAST128 block cipher.
    CAST5,
    /// Schneier et al. Blowfish block cipher.
    Blowfish,
    /// 10-round AES.
    AES128,
    /// 12-round AES.
    AES192,
    /// 14-round AES.
    AES256,
    /// Twofish block cipher.
    Twofish,
    /// Unknown algorithm identifier.
    Unknown(u8),
}

impl From<u8> for SymmetricAlgorithm {
    fn from(u: u8) -> Self {
        use SymmetricAlgorithm::*;
        match u {
            0 => Unencrypted,
            1 => IDEA,
            2 => TripleDES,
            3 => CAST5,
            4 => Blowfish,
            7 => AES128,
            8 => AES192,
            9 => AES256,
            10 => Twofish,
            u => Unknown(u),
        }
    }
}

impl From<SymmetricAlgorithm> for u8 {
    fn from(s: SymmetricAlgorithm) -> u8 {
        use SymmetricAlgorithm::*;
        match s {
            Unencrypted => 0,
            IDEA => 1,
            TripleDES => 2,
            CAST5 => 3,
            Blowfish => 4,
            AES128 => 7,
            AES192 => 8,
            AES256 => 9,
            Twofish => 10,
            Unknown(u) => u,
        }
    }
}

impl SymmetricAlgorithm {
    /// Returns the algorithm's key size in bytes, if known.
    pub fn key_size(&self) -> Option<usize> {
        use SymmetricAlgorithm::*;
        match self {
            IDEA => Some(16),
            TripleDES => Some(24),
            CAST5 => Some(16),
            Blowfish => Some(16),
            AES128 => Some(16),
            AES192 => Some(24),
            AES256 => Some(32),
            Twofish => Some(32),
            Unencrypted | Unknown(_) => None,
        }
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use SymmetricAlgorithm::*;
        match self {
            Unencrypted => f.write_str("Unencrypted"),
            IDEA => f.write_str("IDEA"),
            TripleDES => f.write_str("TripleDES (EDE)"),
            CAST5 => f.write_str("CAST5"),
            Blowfish => f.write_str("Blowfish"),
            AES128 => f.write_str("AES with 128-bit key"),
            AES192 => f.write_str("AES with 192-bit key"),
            AES256 => f.write_str("AES with 256-bit key"),
            Twofish => f.write_str("Twofish"),
            Unknown(u) =>
                write!(f, "Unknown symmetric algorithm {}", u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pk_algo_octets() {
        for u in 0..=u8::MAX {
            assert_eq!(u8::from(PublicKeyAlgorithm::from(u)), u);
        }
        assert_eq!(PublicKeyAlgorithm::from(1),
                   PublicKeyAlgorithm::RSAEncryptSign);
        assert_eq!(PublicKeyAlgorithm::from(2),
                   PublicKeyAlgorithm::RSAEncrypt);
        assert_eq!(PublicKeyAlgorithm::from(16),
                   PublicKeyAlgorithm::ElGamalEncrypt);
        assert_eq!(PublicKeyAlgorithm::from(17),
                   PublicKeyAlgorithm::Unknown(17));
    }

    #[test]
    fn sym_algo_octets() {
        for u in 0..=u8::MAX {
            assert_eq!(u8::from(SymmetricAlgorithm::from(u)), u);
        }
        assert_eq!(SymmetricAlgorithm::from(7),
                   SymmetricAlgorithm::AES128);
        assert_eq!(SymmetricAlgorithm::AES256.key_size(), Some(32));
        assert_eq!(SymmetricAlgorithm::Unknown(42).key_size(), None);
    }
}

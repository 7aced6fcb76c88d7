//! Multiprecision integers.
//!
//! Asymmetric key material and ciphertext components are scalar
//! numbers of arbitrary precision.  OpenPGP stores them encoded as
//! big-endian integers with leading zeros stripped, prefixed by a
//! two-octet big-endian bit count (see [Section 3.2 of RFC 4880]).
//!
//!   [Section 3.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-3.2

use std::fmt;

use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::Result;
use crate::reader::PacketSource;

/// Trims leading zero octets.
fn trim_leading_zeros(v: &[u8]) -> &[u8] {
    let offset = v.iter().take_while(|&&o| o == 0).count();
    &v[offset..]
}

/// A multiprecision integer (MPI).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MPI {
    /// Integer value as big-endian with leading zeros stripped.
    value: Box<[u8]>,
}

assert_send_and_sync!(MPI);

impl MPI {
    /// Creates a new MPI.
    ///
    /// This function takes care of removing leading zeros.
    pub fn new(value: &[u8]) -> Self {
        MPI {
            value: trim_leading_zeros(value).to_vec().into_boxed_slice(),
        }
    }

    /// Returns the length of the MPI in bits.
    ///
    /// Leading zero bits do not count.
    pub fn bits(&self) -> usize {
        self.value.len() * 8
            - self.value.first().map(|&b| b.leading_zeros() as usize)
                  .unwrap_or(0)
    }

    /// Returns the value of this MPI.
    ///
    /// Note that due to stripped leading zeros, the returned view is
    /// shorter than the byte count implied by the originating key's
    /// modulus whenever the value's high octets happen to be zero.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Reads an MPI from the given source.
    ///
    /// Wire format: a two-octet big-endian bit count, followed by the
    /// value in `(bits + 7) / 8` octets.  A bit count that overstates
    /// the value is tolerated; the stored value is normalized.
    pub fn parse<P>(pkt: &mut P) -> Result<Self>
        where P: PacketSource + ?Sized,
    {
        let mut prefix = [0u8; 2];
        pkt.read_exact(&mut prefix)?;
        let bits = u16::from_be_bytes(prefix) as usize;

        let mut value = vec![0u8; (bits + 7) / 8];
        pkt.read_exact(&mut value)?;
        Ok(MPI::new(&value))
    }

    /// Appends the wire form of this MPI to `buf`.
    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&(self.bits() as u16).to_be_bytes());
        buf.extend_from_slice(&self.value);
    }

    /// Returns the value as a big integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.value)
    }
}

impl From<&BigUint> for MPI {
    fn from(v: &BigUint) -> Self {
        MPI::new(&v.to_bytes_be())
    }
}

impl fmt::Debug for MPI {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} bits: {}", self.bits(),
               crate::fmt::hex::encode(&self.value))
    }
}

/// A multiprecision integer holding secrets.
///
/// The backing storage is zeroized when the value is dropped.  Use
/// this for private exponents and for the raw output of a decrypt
/// primitive, which is plaintext key material.
#[derive(Clone)]
pub struct ProtectedMPI {
    /// Integer value as big-endian with leading zeros stripped.
    value: Box<[u8]>,
}

assert_send_and_sync!(ProtectedMPI);

impl Drop for ProtectedMPI {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl ProtectedMPI {
    /// Creates a new protected MPI, removing leading zeros.
    ///
    /// Note that this copies out of `value`; clearing the original
    /// buffer remains the caller's responsibility.
    pub fn new(value: &[u8]) -> Self {
        ProtectedMPI {
            value: trim_leading_zeros(value).to_vec().into_boxed_slice(),
        }
    }

    /// Returns the length in bits, ignoring leading zeros.
    pub fn bits(&self) -> usize {
        self.value.len() * 8
            - self.value.first().map(|&b| b.leading_zeros() as usize)
                  .unwrap_or(0)
    }

    /// Returns the value of this MPI.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the value as a big integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.value)
    }
}

impl From<&BigUint> for ProtectedMPI {
    fn from(v: &BigUint) -> Self {
        ProtectedMPI::new(&v.to_bytes_be())
    }
}

impl fmt::Debug for ProtectedMPI {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if cfg!(debug_assertions) {
            write!(f, "{} bits: {}", self.bits(),
                   crate::fmt::hex::encode(&self.value))
        } else {
            f.write_str("<Redacted>")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::reader::Memory;

    #[test]
    fn leading_zeros_are_stripped() {
        let m = MPI::new(&[0, 0, 1, 2]);
        assert_eq!(m.value(), &[1, 2]);
        assert_eq!(m.bits(), 9);

        let zero = MPI::new(&[0, 0]);
        assert_eq!(zero.value(), &[] as &[u8]);
        assert_eq!(zero.bits(), 0);
    }

    #[test]
    fn parse() {
        // 511, i.e. 9 bits in 2 octets.
        let mut src = Memory::new(b"\x00\x09\x01\xff");
        let m = MPI::parse(&mut src).unwrap();
        assert_eq!(m.value(), &[0x01, 0xff]);
        assert_eq!(m.bits(), 9);
        src.expect_end().unwrap();

        // Truncated value.
        let mut src = Memory::new(b"\x00\x09\x01");
        assert!(matches!(MPI::parse(&mut src),
                         Err(Error::CorruptData(_))));
    }

    #[test]
    fn parse_normalizes_overstated_bit_count() {
        // Declares 16 bits, but the high octet is zero.
        let mut src = Memory::new(b"\x00\x10\x00\x01");
        let m = MPI::parse(&mut src).unwrap();
        src.expect_end().unwrap();
        assert_eq!(m.value(), &[0x01]);
        assert_eq!(m.bits(), 1);
        assert_eq!(m, MPI::new(&[1]));

        let mut buf = Vec::new();
        m.serialize_into(&mut buf);
        assert_eq!(buf, b"\x00\x01\x01");
    }

    #[test]
    fn serialize_roundtrip() {
        let m = MPI::new(&[0x01, 0xff]);
        let mut buf = Vec::new();
        m.serialize_into(&mut buf);
        assert_eq!(buf, b"\x00\x09\x01\xff");

        let mut src = Memory::new(&buf);
        assert_eq!(MPI::parse(&mut src).unwrap(), m);
    }

    #[test]
    fn biguint_conversion() {
        let m = MPI::new(&[0x12, 0x34]);
        assert_eq!(MPI::from(&m.to_biguint()), m);

        let p = ProtectedMPI::new(&[0x00, 0x56]);
        assert_eq!(p.value(), &[0x56]);
        assert_eq!(p.to_biguint(), BigUint::from(0x56u32));
    }
}

//! 8-byte key identifiers.

use std::convert::TryFrom;
use std::fmt;

use crate::{Error, Result};

/// An 8-byte OpenPGP key identifier.
///
/// A *v4* Key ID is defined as the lower 8 bytes of the key's
/// fingerprint (see [Section 12.2 of RFC 4880]).  A session-key
/// packet may instead carry the all-zero *wildcard* id, meaning the
/// recipient hint was omitted and any available key should be tried.
///
///   [Section 12.2 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-12.2
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct KeyID([u8; 8]);

assert_send_and_sync!(KeyID);

impl fmt::Debug for KeyID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("KeyID")
            .field(&format!("{:X}", self))
            .finish()
    }
}

impl fmt::Display for KeyID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:X}", self)
    }
}

impl fmt::UpperHex for KeyID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for KeyID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl From<[u8; 8]> for KeyID {
    fn from(b: [u8; 8]) -> Self {
        KeyID(b)
    }
}

impl From<u64> for KeyID {
    fn from(i: u64) -> Self {
        KeyID(i.to_be_bytes())
    }
}

impl TryFrom<&[u8]> for KeyID {
    type Error = Error;
    fn try_from(b: &[u8]) -> Result<Self> {
        Ok(KeyID(<[u8; 8]>::try_from(b)
                 .map_err(|_| Error::Bug("key id must be 8 bytes"))?))
    }
}

impl KeyID {
    /// Returns the wildcard key id.
    pub fn wildcard() -> Self {
        KeyID([0; 8])
    }

    /// Returns whether this is the wildcard key id.
    pub fn is_wildcard(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Returns the raw identifier as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns whether a packet bearing `self` addresses `key_id`.
    ///
    /// This is the key-id check of [Section 5.1 of RFC 4880]: true if
    /// `self` is the wildcard, or if the two ids are byte-equal.
    /// Note that the relation is not symmetric; the wildcard lives on
    /// the packet side only.
    ///
    ///   [Section 5.1 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.1
    pub fn aliases(&self, key_id: &KeyID) -> bool {
        self.is_wildcard() || self == key_id
    }
}

//! Cryptographic primitives.
//!
//! The asymmetric operations here are thin wrappers over big-integer
//! arithmetic; the interesting, attacker-facing logic lives in the
//! packet layer and in the padding validator.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

pub mod elgamal;
pub(crate) mod eme;
pub mod mpi;
pub mod rsa;

/// Holds a session key.
///
/// The session key is cleared when the value is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionKey(Vec<u8>);

assert_send_and_sync!(SessionKey);

impl SessionKey {
    /// Returns the key material.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for SessionKey {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for SessionKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SessionKey {
    fn from(v: Vec<u8>) -> Self {
        SessionKey(v)
    }
}

impl From<&[u8]> for SessionKey {
    fn from(v: &[u8]) -> Self {
        SessionKey(v.to_vec())
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if cfg!(debug_assertions) {
            write!(f, "SessionKey ({})",
                   crate::fmt::hex::encode(&self.0))
        } else {
            f.write_str("SessionKey ( <Redacted> )")
        }
    }
}

//! Packet-related types and operations.

pub mod key;
pub mod pkesk;

pub use key::{SecretKey, SecretKeyMaterial};
pub use pkesk::{
    DecryptedSessionKey,
    decrypt_session_key,
    encrypt_session_key,
};

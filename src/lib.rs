//! Decryption of OpenPGP public-key encrypted session key packets.
//!
//! This crate implements the recipient side of [Section 5.1 of RFC
//! 4880]: given a secret key and the body of a version 3 public-key
//! encrypted session key (PKESK) packet, it recovers the symmetric
//! algorithm identifier and session key that protect the message
//! payload.  Supported asymmetric algorithms are RSA and ElGamal.
//!
//! The packet body is consumed from a pull-style [`PacketSource`] in
//! a single synchronous pass; nothing in this crate holds global
//! state, so independent decryptions may run concurrently as long as
//! each operates on its own source and output.
//!
//! Decryption failures caused by a mismatched key id, a mismatched
//! algorithm, bad padding, or a bad checksum are deliberately
//! collapsed into the single [`Error::WrongKey`] value, so a caller
//! probing with crafted ciphertexts learns nothing about *why* an
//! attempt failed.  Buffers holding plaintext key material are
//! zeroized on every exit path.
//!
//!   [Section 5.1 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.1

#[macro_use]
mod macros;

pub mod crypto;
mod error;
pub mod fmt;
mod keyid;
pub mod packet;
mod reader;
pub mod types;

pub use crate::error::{Error, Result};
pub use crate::keyid::KeyID;
pub use crate::packet::key::{SecretKey, SecretKeyMaterial};
pub use crate::packet::pkesk::{
    DecryptedSessionKey,
    decrypt_session_key,
    encrypt_session_key,
};
pub use crate::reader::{Generic, Memory, PacketSource};

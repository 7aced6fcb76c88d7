//! The crate's error taxonomy.

/// Result specialization.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by this crate.
///
/// Failures that could tell an attacker probing with crafted
/// ciphertexts *why* a decryption attempt did not produce a valid
/// session key (mismatched key id, mismatched algorithm, bad padding,
/// bad checksum) are all reported as [`Error::WrongKey`].  That
/// variant deliberately carries no further detail; diagnostics go to
/// the crate's trace channel instead.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An internal precondition was violated.
    ///
    /// This indicates caller misuse, e.g. a key whose material does
    /// not match its declared algorithm.  It is never triggered by
    /// packet contents.
    #[error("Internal error: {0}")]
    Bug(&'static str),

    /// Malformed packet framing.
    ///
    /// Bad version octet, truncated fields, or trailing bytes after
    /// the packet body.
    #[error("Corrupt data: {0}")]
    CorruptData(&'static str),

    /// This key cannot decrypt the packet.
    ///
    /// The merged signal covering key-id mismatch, algorithm
    /// mismatch, padding failure, and checksum mismatch.
    #[error("Wrong key or corrupt data")]
    WrongKey,

    /// The packet names a public-key algorithm we do not implement.
    #[error("Unknown public-key algorithm: {0}")]
    UnknownPubAlgo(u8),

    /// An IO error occurred in the underlying byte source.
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

assert_send_and_sync!(Error);

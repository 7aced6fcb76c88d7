//! EME-PKCS1-v1.5 message encoding.
//!
//! The legacy encoding wrapping a short message inside a byte string
//! sized to the recipient's modulus (see [Section 13.1 of RFC 4880]):
//!
//! ```text
//! 00 || 02 || PS || 00 || M
//! ```
//!
//! where `PS` is at least eight random non-zero padding octets.  The
//! leading zero octet never survives the round trip through the MPI
//! representation of the encrypted value, so the buffers handled here
//! start at the `02` block-type octet.
//!
//!   [Section 13.1 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-13.1

use rand::Rng;
use zeroize::Zeroize;

use crate::{Error, Result};
use crate::crypto::mpi::ProtectedMPI;

/// Minimum number of padding octets.
const MIN_PS: usize = 8;

/// Unwraps `02 || PS || 00 || M`, returning `M`.
///
/// Returns `None` if the envelope is malformed.  The decrypted value
/// may be shorter than the modulus (the MPI representation strips
/// leading zeros), so a too-short buffer is simply a padding failure.
pub(crate) fn decode(data: &[u8]) -> Option<&[u8]> {
    if data.len() < 1 + MIN_PS + 1 {
        return None;
    }
    if data[0] != 0x02 {
        return None;
    }

    // Scan the padding, stopping at the first zero octet.
    let ps = data[1..].iter().take_while(|&&b| b != 0).count();
    if 1 + ps == data.len() {
        // Ran off the end without a terminating zero.
        return None;
    }
    if ps < MIN_PS {
        return None;
    }
    Some(&data[1 + ps + 1..])
}

/// Wraps `msg` for a `k`-octet modulus.
///
/// Returns the `k - 1` octet value `02 || PS || 00 || M` with fresh
/// random non-zero padding.
pub(crate) fn encode<R>(msg: &[u8], k: usize, rng: &mut R)
                        -> Result<ProtectedMPI>
    where R: Rng,
{
    if msg.len() + MIN_PS + 3 > k {
        return Err(Error::Bug("message too long for key"));
    }

    let mut buf = vec![0u8; k - 1];
    buf[0] = 0x02;
    let ps_end = k - 2 - msg.len();
    for b in &mut buf[1..ps_end] {
        *b = rng.gen_range(1..=255);
    }
    // buf[ps_end] is the zero separator.
    buf[ps_end + 1..].copy_from_slice(msg);

    let padded = ProtectedMPI::new(&buf);
    buf.zeroize();
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffers() {
        assert_eq!(decode(&[]), None);
        for len in 1..10 {
            let mut buf = vec![1u8; len];
            buf[0] = 0x02;
            assert_eq!(decode(&buf), None, "length {}", len);
        }
    }

    #[test]
    fn rejects_wrong_block_type() {
        // 01 || eight non-zero octets || 00 || M
        let buf = b"\x01\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\x00\x42";
        assert_eq!(decode(buf), None);
    }

    #[test]
    fn rejects_unterminated_padding() {
        let buf = [0x02, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        assert_eq!(decode(&buf), None);
    }

    #[test]
    fn rejects_short_padding() {
        // Only seven padding octets.
        let buf = b"\x02\xaa\xaa\xaa\xaa\xaa\xaa\xaa\x00\x42\x42";
        assert_eq!(decode(buf), None);
    }

    #[test]
    fn accepts_minimal_padding() {
        let buf = b"\x02\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\x00\x42\x43";
        assert_eq!(decode(buf), Some(&b"\x42\x43"[..]));
    }

    #[test]
    fn accepts_empty_message() {
        // Terminating zero in the last position.
        let buf = b"\x02\xaa\xaa\xaa\xaa\xaa\xaa\xaa\xaa\x00";
        assert_eq!(decode(buf), Some(&b""[..]));
    }

    #[test]
    fn encode_fits_or_fails() {
        let mut rng = rand::thread_rng();
        assert!(encode(&[0x42; 16], 16 + 11, &mut rng).is_ok());
        assert!(matches!(encode(&[0x42; 16], 16 + 10, &mut rng),
                         Err(Error::Bug(_))));
    }

    #[test]
    fn encode_decode() {
        fn prop(msg: Vec<u8>, slack: u8) -> bool {
            let mut rng = rand::thread_rng();
            let k = msg.len() + 11 + slack as usize;
            let padded = encode(&msg, k, &mut rng).unwrap();
            assert_eq!(padded.value().len(), k - 1);
            decode(padded.value()) == Some(&msg[..])
        }
        quickcheck::quickcheck(prop as fn(Vec<u8>, u8) -> bool);
    }
}

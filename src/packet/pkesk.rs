//! Public-Key Encrypted Session Key packets, version 3.
//!
//! The session key is needed to decrypt the actual ciphertext.  See
//! [Section 5.1 of RFC 4880] for details.
//!
//! [`decrypt_session_key`] is the packet-level protocol driver: it
//! consumes a packet body from a [`PacketSource`], dispatches to the
//! asymmetric primitive matching the recipient key, validates the
//! EME-PKCS1-v1.5 envelope and the session-key checksum, and only
//! then hands the result to the caller.  All the ways an attacker
//! can make that pipeline fail collapse into [`Error::WrongKey`];
//! details go to the trace channel only.
//!
//!   [Section 5.1 of RFC 4880]: https://tools.ietf.org/html/rfc4880#section-5.1

use crate::{Error, Result};
use crate::crypto::{SessionKey, elgamal, eme, rsa};
use crate::crypto::mpi::{MPI, ProtectedMPI};
use crate::keyid::KeyID;
use crate::packet::key::{SecretKey, SecretKeyMaterial};
use crate::reader::PacketSource;
use crate::types::{PublicKeyAlgorithm, SymmetricAlgorithm};

const TRACE: bool = false;

/// A session key recovered from a version 3 PKESK packet.
///
/// Only ever constructed on full success; no partially populated
/// value exists on any failure path.
#[derive(Debug)]
pub struct DecryptedSessionKey {
    sym_algo: SymmetricAlgorithm,
    session_key: SessionKey,
}

assert_send_and_sync!(DecryptedSessionKey);

impl DecryptedSessionKey {
    /// Returns the symmetric algorithm protecting the payload.
    pub fn sym_algo(&self) -> SymmetricAlgorithm {
        self.sym_algo
    }

    /// Returns the session key.
    pub fn session_key(&self) -> &SessionKey {
        &self.session_key
    }
}

/// Decrypts a public-key encrypted session key packet.
///
/// `pkt` must be positioned at the start of the packet body.  The
/// body is fully consumed; on success, a final check asserts that no
/// trailing bytes remain.
///
/// The recovered plaintext integer is scoped to this call and
/// zeroized on every exit path.
pub fn decrypt_session_key<P>(key: &SecretKey, pkt: &mut P)
                              -> Result<DecryptedSessionKey>
    where P: PacketSource + ?Sized,
{
    tracer!(TRACE, "decrypt_session_key");

    let version = pkt.read_u8()?;
    if version != 3 {
        t!("unknown packet version {}", version);
        return Err(Error::CorruptData("unsupported packet version"));
    }

    let mut keyid = [0u8; 8];
    pkt.read_exact(&mut keyid)?;
    let keyid = KeyID::from(keyid);
    if ! keyid.aliases(key.keyid()) {
        t!("packet key id {} does not match {}", keyid, key.keyid());
        return Err(Error::WrongKey);
    }

    let algo = pkt.read_u8()?;
    let m = match PublicKeyAlgorithm::from(algo) {
        PublicKeyAlgorithm::RSAEncryptSign
            | PublicKeyAlgorithm::RSAEncrypt =>
            decrypt_rsa(key, pkt)?,
        PublicKeyAlgorithm::ElGamalEncrypt =>
            decrypt_elgamal(key, pkt)?,
        _ => return Err(Error::UnknownPubAlgo(algo)),
    };

    let msg = match eme::decode(m.value()) {
        Some(msg) => msg,
        None => {
            t!("EME-PKCS1-v1.5 check failed");
            return Err(Error::WrongKey);
        },
    };

    // secret message: 1 octet cipher algorithm, session key,
    // 2 octet checksum.
    verify_checksum(msg)?;

    let sym_algo = SymmetricAlgorithm::from(msg[0]);
    let session_key = SessionKey::from(&msg[1..msg.len() - 2]);

    pkt.expect_end()?;

    Ok(DecryptedSessionKey {
        sym_algo,
        session_key,
    })
}

/// Reads and decrypts an RSA-encrypted session key.
///
/// A recipient key of any other algorithm is reported as
/// [`Error::WrongKey`] before any ciphertext is read, exactly like a
/// mismatched key id.
fn decrypt_rsa<P>(key: &SecretKey, pkt: &mut P) -> Result<ProtectedMPI>
    where P: PacketSource + ?Sized,
{
    tracer!(TRACE, "decrypt_rsa");

    if key.pk_algo() != PublicKeyAlgorithm::RSAEncryptSign
        && key.pk_algo() != PublicKeyAlgorithm::RSAEncrypt
    {
        t!("recipient key is {}, not RSA", key.pk_algo());
        return Err(Error::WrongKey);
    }

    let c = MPI::parse(pkt)?;
    match key.material() {
        SecretKeyMaterial::Rsa { n, d, .. } =>
            rsa::decrypt(n, d, &c),
        _ => Err(Error::Bug("RSA key without RSA material")),
    }
}

/// Reads and decrypts an ElGamal-encrypted session key.
fn decrypt_elgamal<P>(key: &SecretKey, pkt: &mut P)
                      -> Result<ProtectedMPI>
    where P: PacketSource + ?Sized,
{
    tracer!(TRACE, "decrypt_elgamal");

    if key.pk_algo() != PublicKeyAlgorithm::ElGamalEncrypt {
        t!("recipient key is {}, not ElGamal", key.pk_algo());
        return Err(Error::WrongKey);
    }

    let c1 = MPI::parse(pkt)?;
    let c2 = MPI::parse(pkt)?;
    match key.material() {
        SecretKeyMaterial::ElGamal { p, x, .. } =>
            elgamal::decrypt(p, x, &c1, &c2),
        _ => Err(Error::Bug("ElGamal key without ElGamal material")),
    }
}

/// Verifies the session-key checksum.
///
/// The trailing two octets are the big-endian sum of the session-key
/// octets mod 65536; the leading cipher-algorithm octet is not part
/// of the sum.  The caller has implicitly bounded the length via the
/// padding check, but we re-check independently.
fn verify_checksum(msg: &[u8]) -> Result<()> {
    tracer!(TRACE, "verify_checksum");

    if msg.len() < 3 {
        return Err(Error::WrongKey);
    }

    let mut sum: u32 = 0;
    for &b in &msg[1..msg.len() - 2] {
        sum += u32::from(b);
    }
    sum &= 0xffff;

    let declared = u32::from(u16::from_be_bytes(
        [msg[msg.len() - 2], msg[msg.len() - 1]]));
    if sum != declared {
        t!("session key checksum failed");
        return Err(Error::WrongKey);
    }
    Ok(())
}

/// Encrypts a session key to `key`, producing a version 3 packet body.
///
/// `keyid` is the recipient hint written into the packet; pass
/// [`KeyID::wildcard`] to omit it.  The counterpart of
/// [`decrypt_session_key`], mainly useful for building messages and
/// test vectors.
pub fn encrypt_session_key(key: &SecretKey, keyid: &KeyID,
                           sym_algo: SymmetricAlgorithm,
                           session_key: &SessionKey)
                           -> Result<Vec<u8>>
{
    let mut rng = rand::thread_rng();

    // secret message: 1 octet cipher algorithm, session key,
    // 2 octet checksum.
    let mut secret = Vec::with_capacity(session_key.len() + 3);
    secret.push(sym_algo.into());
    secret.extend_from_slice(session_key);
    let sum = session_key.iter().map(|&b| u32::from(b)).sum::<u32>()
        & 0xffff;
    secret.extend_from_slice(&(sum as u16).to_be_bytes());
    let secret = SessionKey::from(secret);

    let mut pkt = vec![3u8];
    pkt.extend_from_slice(keyid.as_bytes());
    pkt.push(key.pk_algo().into());

    match key.material() {
        SecretKeyMaterial::Rsa { n, e, .. } => {
            let k = (n.bits() + 7) / 8;
            let padded = eme::encode(&secret, k, &mut rng)?;
            rsa::encrypt(n, e, &padded)?.serialize_into(&mut pkt);
        },
        SecretKeyMaterial::ElGamal { p, g, y, .. } => {
            let k = (p.bits() + 7) / 8;
            let padded = eme::encode(&secret, k, &mut rng)?;
            let (c1, c2) = elgamal::encrypt(p, g, y, &padded, &mut rng)?;
            c1.serialize_into(&mut pkt);
            c2.serialize_into(&mut pkt);
        },
    }

    Ok(pkt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_ok() {
        // id = 5, key = [1, 2, 3], sum = 6.
        assert!(verify_checksum(&[5, 1, 2, 3, 0, 6]).is_ok());
    }

    #[test]
    fn checksum_excludes_cipher_octet() {
        // Including the id octet would yield 11.
        assert!(matches!(verify_checksum(&[5, 1, 2, 3, 0, 11]),
                         Err(Error::WrongKey)));
    }

    #[test]
    fn checksum_mismatch() {
        assert!(matches!(verify_checksum(&[5, 1, 2, 3, 0, 7]),
                         Err(Error::WrongKey)));
    }

    #[test]
    fn checksum_short_message() {
        assert!(matches!(verify_checksum(&[]), Err(Error::WrongKey)));
        assert!(matches!(verify_checksum(&[5, 0]),
                         Err(Error::WrongKey)));
    }

    #[test]
    fn checksum_wraps_mod_65536() {
        // 300 times 0xff sums to 76500; mod 65536 that is 10964,
        // i.e. 0x2ad4.
        let mut msg = vec![7u8];
        msg.extend_from_slice(&[0xff; 300]);
        msg.extend_from_slice(&[0x2a, 0xd4]);
        assert!(verify_checksum(&msg).is_ok());
    }
}

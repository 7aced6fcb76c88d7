//! Pull-style byte sources.
//!
//! A packet body is consumed in a single forward pass: the decryptor
//! asks for exactly the bytes the wire format prescribes and finally
//! asserts that the source is exhausted.  The trait is deliberately
//! minimal so that a plain buffer, a chained filter, or a socket
//! reader can all supply packet bytes.

use std::io;

use crate::{Error, Result};

/// A pull-style source of packet bytes.
///
/// Reads are all-or-nothing: a source that cannot supply the
/// requested bytes fails with [`Error::CorruptData`], which matches
/// the only situation in which a well-formed packet runs dry, a
/// truncated packet.
pub trait PacketSource {
    /// Reads exactly `buf.len()` bytes.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Reads a single byte.
    fn read_u8(&mut self) -> Result<u8> {
        let mut b = [0u8; 1];
        self.read_exact(&mut b)?;
        Ok(b[0])
    }

    /// Asserts that no bytes remain.
    fn expect_end(&mut self) -> Result<()>;
}

impl<P: PacketSource + ?Sized> PacketSource for &mut P {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_exact(buf)
    }

    fn read_u8(&mut self) -> Result<u8> {
        (**self).read_u8()
    }

    fn expect_end(&mut self) -> Result<()> {
        (**self).expect_end()
    }
}

/// A packet source reading from a memory buffer.
#[derive(Debug)]
pub struct Memory<'a> {
    data: &'a [u8],
    pos: usize,
}

assert_send_and_sync!(Memory<'_>);

impl<'a> Memory<'a> {
    /// Instantiates a new memory-based source.
    pub fn new(data: &'a [u8]) -> Self {
        Memory { data, pos: 0 }
    }

    /// Returns the number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl PacketSource for Memory<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.remaining() < buf.len() {
            return Err(Error::CorruptData("unexpected end of packet"));
        }
        buf.copy_from_slice(&self.data[self.pos..self.pos + buf.len()]);
        self.pos += buf.len();
        Ok(())
    }

    fn expect_end(&mut self) -> Result<()> {
        if self.remaining() > 0 {
            return Err(Error::CorruptData("trailing data after packet"));
        }
        Ok(())
    }
}

/// A packet source wrapping a generic `io::Read`er.
#[derive(Debug)]
pub struct Generic<R: io::Read> {
    reader: R,
}

assert_send_and_sync!(Generic<R> where R: std::io::Read);

impl<R: io::Read> Generic<R> {
    /// Instantiates a source reading from `reader`.
    pub fn new(reader: R) -> Self {
        Generic { reader }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: io::Read> PacketSource for Generic<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.reader.read_exact(buf).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof =>
                Error::CorruptData("unexpected end of packet"),
            _ => Error::Io(e),
        })
    }

    fn expect_end(&mut self) -> Result<()> {
        let mut b = [0u8; 1];
        loop {
            match self.reader.read(&mut b) {
                Ok(0) => return Ok(()),
                Ok(_) => return Err(
                    Error::CorruptData("trailing data after packet")),
                Err(e) if e.kind() == io::ErrorKind::Interrupted =>
                    continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }
}

//! Streaming Salsa20 reader and writer

use core::fmt;
use std::io;

use algorithms::{Rounds, Salsa20};
use params::salsa20::SALSA20_BLOCK_SIZE;
use salsastream_api::{ByteSink, ByteSource};
use zeroize::Zeroize;

use super::StreamState;
use crate::error::{validate_stream_open, Error, Result};

/// Pull-based Salsa20 transform over a byte source
///
/// Each refill reads up to one 64-byte block from the source and XORs it with
/// the next keystream block. A read shorter than a block is the last one the
/// source will ever see; its bytes are still delivered, after which every
/// `read` returns 0.
///
/// Errors from the source are returned unchanged and leave the reader ready
/// to retry the same block. When a refill fails after some bytes were already
/// copied into the caller's buffer, `read` returns that count instead and the
/// error is returned by the next non-empty `read`.
pub struct Salsa20Reader<S: ByteSource> {
    source: S,
    cipher: Salsa20,
    block: [u8; SALSA20_BLOCK_SIZE],
    /// Valid bytes in `block`
    count: usize,
    /// Next undelivered byte in `block`
    offset: usize,
    source_exhausted: bool,
    state: StreamState,
    /// Source error held back behind a partial read
    pending: Option<S::Error>,
}

impl<S: ByteSource> Salsa20Reader<S> {
    /// Salsa20/20 reader from a 16- or 32-byte key and an 8-byte nonce
    pub fn new(source: S, key: &[u8], nonce: &[u8]) -> Result<Self> {
        Self::with_rounds(source, key, nonce, Rounds::default())
    }

    /// Reader running the given round variant
    pub fn with_rounds(source: S, key: &[u8], nonce: &[u8], rounds: Rounds) -> Result<Self> {
        let cipher = Salsa20::with_rounds(key, nonce, rounds)?;
        Ok(Self::from_cipher(source, cipher))
    }

    /// Reader continuing from an existing cipher position
    pub fn from_cipher(source: S, cipher: Salsa20) -> Self {
        Self {
            source,
            cipher,
            block: [0; SALSA20_BLOCK_SIZE],
            count: 0,
            offset: 0,
            source_exhausted: false,
            state: StreamState::AwaitingBlock,
            pending: None,
        }
    }

    /// Current position in the source
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Whether every byte of the source has been delivered
    pub fn is_finished(&self) -> bool {
        self.state == StreamState::EndOfStream
    }

    /// The wrapped cipher
    pub fn cipher(&self) -> &Salsa20 {
        &self.cipher
    }

    /// Borrow the source
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    fn pull_block(&mut self) -> core::result::Result<(), S::Error> {
        let read = self.source.read(&mut self.block)?.min(SALSA20_BLOCK_SIZE);
        self.cipher.apply_keystream(&mut self.block[..read]);
        self.count = read;
        self.offset = 0;

        if read < SALSA20_BLOCK_SIZE {
            self.source_exhausted = true;
        }
        self.state = if read > 0 {
            StreamState::HasData
        } else {
            StreamState::EndOfStream
        };
        Ok(())
    }
}

impl<S: ByteSource> ByteSource for Salsa20Reader<S> {
    type Error = S::Error;

    fn read(&mut self, buf: &mut [u8]) -> core::result::Result<usize, Self::Error> {
        if !buf.is_empty() {
            if let Some(e) = self.pending.take() {
                return Err(e);
            }
        }

        let mut written = 0;
        while written < buf.len() {
            match self.state {
                StreamState::EndOfStream => break,
                StreamState::AwaitingBlock => {
                    if let Err(e) = self.pull_block() {
                        if written == 0 {
                            return Err(e);
                        }
                        self.pending = Some(e);
                        break;
                    }
                }
                StreamState::HasData => {
                    let take = (self.count - self.offset).min(buf.len() - written);
                    buf[written..written + take]
                        .copy_from_slice(&self.block[self.offset..self.offset + take]);
                    self.offset += take;
                    written += take;

                    if self.offset == self.count {
                        self.block.zeroize();
                        self.state = if self.source_exhausted {
                            StreamState::EndOfStream
                        } else {
                            StreamState::AwaitingBlock
                        };
                    }
                }
            }
        }
        Ok(written)
    }

    fn has_bytes_available(&self) -> bool {
        self.state != StreamState::EndOfStream
    }
}

impl<S> io::Read for Salsa20Reader<S>
where
    S: ByteSource,
    S::Error: Into<io::Error>,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        ByteSource::read(self, buf).map_err(Into::into)
    }
}

impl<S: ByteSource> Drop for Salsa20Reader<S> {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}

impl<S: ByteSource> fmt::Debug for Salsa20Reader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salsa20Reader")
            .field("state", &self.state)
            .field("buffered", &(self.count - self.offset))
            .field("cipher", &self.cipher)
            .finish_non_exhaustive()
    }
}

/// Push-based Salsa20 transform over a byte sink
///
/// Writes are XORed with the keystream and forwarded one 64-byte block at a
/// time. If the sink fails after accepting part of a write, `write` returns the
/// number of bytes it accepted, the keystream is rewound to the first byte it
/// did not take, and the error surfaces on the next call. After [`close`](ByteSink::close) further writes fail with
/// [`Error::StreamFinished`].
pub struct Salsa20Writer<K> {
    sink: K,
    cipher: Salsa20,
    block: [u8; SALSA20_BLOCK_SIZE],
    closed: bool,
}

impl<K> Salsa20Writer<K>
where
    K: ByteSink,
    K::Error: Into<Error>,
{
    /// Salsa20/20 writer from a 16- or 32-byte key and an 8-byte nonce
    pub fn new(sink: K, key: &[u8], nonce: &[u8]) -> Result<Self> {
        Self::with_rounds(sink, key, nonce, Rounds::default())
    }

    /// Writer running the given round variant
    pub fn with_rounds(sink: K, key: &[u8], nonce: &[u8], rounds: Rounds) -> Result<Self> {
        let cipher = Salsa20::with_rounds(key, nonce, rounds)?;
        Ok(Self::from_cipher(sink, cipher))
    }

    /// Writer continuing from an existing cipher position
    pub fn from_cipher(sink: K, cipher: Salsa20) -> Self {
        Self {
            sink,
            cipher,
            block: [0; SALSA20_BLOCK_SIZE],
            closed: false,
        }
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The wrapped cipher
    pub fn cipher(&self) -> &Salsa20 {
        &self.cipher
    }

    /// Borrow the sink
    pub fn get_ref(&self) -> &K {
        &self.sink
    }
}

/// Hand all of `data` to the sink, looping over partial writes
///
/// On failure the error comes back with the number of bytes the sink accepted
/// before it.
fn forward<K>(sink: &mut K, data: &[u8]) -> core::result::Result<(), (usize, Error)>
where
    K: ByteSink,
    K::Error: Into<Error>,
{
    let mut sent = 0;
    while sent < data.len() {
        let accepted = match sink.write(&data[sent..]) {
            Ok(0) => return Err((sent, io::Error::from(io::ErrorKind::WriteZero).into())),
            Ok(n) => n.min(data.len() - sent),
            Err(e) => return Err((sent, e.into())),
        };
        sent += accepted;
    }
    Ok(())
}

impl<K> ByteSink for Salsa20Writer<K>
where
    K: ByteSink,
    K::Error: Into<Error>,
{
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        validate_stream_open(self.closed)?;

        let start = self.cipher.current_pos();
        let mut forwarded = 0;
        for chunk in buf.chunks(SALSA20_BLOCK_SIZE) {
            let block = &mut self.block[..chunk.len()];
            block.copy_from_slice(chunk);
            self.cipher.apply_keystream(block);
            let sent = forward(&mut self.sink, block);
            self.block.zeroize();

            match sent {
                Ok(()) => forwarded += chunk.len(),
                Err((accepted, e)) => {
                    forwarded += accepted;
                    // Rewind to the first byte the sink did not take
                    self.cipher.seek(start.wrapping_add(forwarded as u64));
                    if forwarded == 0 {
                        return Err(e);
                    }
                    break;
                }
            }
        }

        Ok(forwarded)
    }

    fn close(&mut self) -> Result<()> {
        validate_stream_open(self.closed)?;
        self.closed = true;
        self.sink.close().map_err(Into::into)
    }

    fn has_space_available(&self) -> bool {
        !self.closed && self.sink.has_space_available()
    }
}

impl<K> io::Write for Salsa20Writer<K>
where
    K: ByteSink,
    K::Error: Into<Error>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        ByteSink::write(self, buf).map_err(io::Error::from)
    }

    // Nothing is buffered between writes
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<K> Drop for Salsa20Writer<K> {
    fn drop(&mut self) {
        self.block.zeroize();
    }
}

impl<K> fmt::Debug for Salsa20Writer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salsa20Writer")
            .field("closed", &self.closed)
            .field("cipher", &self.cipher)
            .finish_non_exhaustive()
    }
}

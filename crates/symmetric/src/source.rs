//! Byte source and sink adapters
//!
//! In-memory and `std::io` backed implementations of [`ByteSource`] and
//! [`ByteSink`]. A short read from a source is its only end-of-data signal,
//! so the `std::io` adapter keeps reading until the request is full or the
//! reader reports end of file.

use core::convert::Infallible;
use std::io::{self, Read, Write};

use salsastream_api::{ByteSink, ByteSource};

/// Source over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    /// Read from the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Bytes not yet read
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }
}

impl ByteSource for SliceSource<'_> {
    type Error = Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = self.remaining();
        let take = remaining.len().min(buf.len());
        buf[..take].copy_from_slice(&remaining[..take]);
        self.position += take;
        Ok(take)
    }

    fn has_bytes_available(&self) -> bool {
        self.position < self.data.len()
    }
}

/// Source over any [`std::io::Read`]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    exhausted: bool,
}

impl<R: Read> IoSource<R> {
    /// Wrap a reader
    pub fn new(inner: R) -> Self {
        Self { inner, exhausted: false }
    }

    /// Unwrap the reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    type Error = io::Error;

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() && !self.exhausted {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => self.exhausted = true,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    fn has_bytes_available(&self) -> bool {
        !self.exhausted
    }
}

/// Sink collecting into a `Vec<u8>`
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    data: Vec<u8>,
    closed: bool,
}

impl VecSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Take the collected bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl ByteSink for VecSink {
    type Error = Infallible;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.closed = true;
        Ok(())
    }

    fn has_space_available(&self) -> bool {
        !self.closed
    }
}

/// Sink over any [`std::io::Write`]
///
/// Every `write` is a `write_all`; `close` flushes.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the writer
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    type Error = io::Error;

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_all(buf)?;
        Ok(buf.len())
    }

    fn close(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

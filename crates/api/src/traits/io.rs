//! Pull-based byte sources and push-based byte sinks
//!
//! These traits describe the collaborators a streaming cipher sits between.
//! A source signals end of data only by returning fewer bytes than were
//! requested; there is no separate end-of-stream marker. Because an adapter
//! that decrypts a source is itself a source, adapters can be chained.

/// A pull-based producer of bytes
pub trait ByteSource {
    /// Error reported by the underlying reader
    type Error;

    /// Read up to `buf.len()` bytes into `buf` and return how many were written
    ///
    /// Returning fewer bytes than requested means the source is exhausted.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Whether a subsequent `read` may still produce bytes
    fn has_bytes_available(&self) -> bool {
        true
    }
}

/// A push-based consumer of bytes
pub trait ByteSink {
    /// Error reported by the underlying writer
    type Error;

    /// Write `buf` and return how many bytes were accepted
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Flush and release the sink; writes after `close` are not supported
    fn close(&mut self) -> Result<(), Self::Error>;

    /// Whether the sink can accept more bytes
    fn has_space_available(&self) -> bool {
        true
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }

    fn has_bytes_available(&self) -> bool {
        (**self).has_bytes_available()
    }
}

impl<K: ByteSink + ?Sized> ByteSink for &mut K {
    type Error = K::Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        (**self).write(buf)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }

    fn has_space_available(&self) -> bool {
        (**self).has_space_available()
    }
}

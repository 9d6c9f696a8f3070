//! Capability traits implemented by ciphers and byte streams

pub mod io;
pub mod stream;

pub use io::{ByteSink, ByteSource};
pub use stream::{IntegerWidth, KeystreamInteger, RandomGenerator, StreamCipher};

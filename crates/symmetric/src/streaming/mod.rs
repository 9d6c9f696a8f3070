//! Streaming Salsa20 adapters
//!
//! [`Salsa20Reader`] pulls bytes from a [`ByteSource`](salsastream_api::ByteSource)
//! a block at a time and hands out the XOR-transformed result; it is itself a
//! byte source, so readers can be stacked. [`Salsa20Writer`] is the push-side
//! counterpart over a [`ByteSink`](salsastream_api::ByteSink).

pub mod salsa20;

pub use salsa20::{Salsa20Reader, Salsa20Writer};

/// Position of a reader in its source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// The decoded block is used up and the source may still have data
    AwaitingBlock,
    /// The decoded block still holds undelivered bytes
    HasData,
    /// The source is exhausted and every decoded byte has been delivered
    EndOfStream,
}

//! End-to-end streaming scenarios across the reader, writer and one-shot API

use std::io::{self, Read};

use salsastream_algorithms::{Rounds, Salsa20};
use salsastream_symmetric::{
    decrypt, encrypt, ByteSink, ByteSource, IoSink, IoSource, Salsa20Reader, Salsa20Writer,
    SliceSource, StreamState, VecSink,
};
use salsastream_tests::keystream;

const KEY: [u8; 16] = [0x42; 16];
const NONCE: [u8; 8] = [0x24; 8];

/// Source serving exactly 100 bytes, then short reads forever.
struct HundredBytes {
    served: usize,
}

impl ByteSource for HundredBytes {
    type Error = io::Error;

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let take = (100 - self.served).min(buf.len());
        for (i, byte) in buf[..take].iter_mut().enumerate() {
            *byte = (self.served + i) as u8;
        }
        self.served += take;
        Ok(take)
    }
}

#[test]
fn test_hundred_byte_scenario() {
    let mut reader = Salsa20Reader::new(HundredBytes { served: 0 }, &KEY, &NONCE).unwrap();

    let mut total = Vec::new();
    let mut buf = [0u8; 33];
    loop {
        let n = ByteSource::read(&mut reader, &mut buf).unwrap();
        if n == 0 {
            break;
        }
        total.extend_from_slice(&buf[..n]);
    }
    assert_eq!(total.len(), 100);

    let stream = keystream(&KEY, &NONCE, Rounds::R20, 100);
    for (i, (&c, &k)) in total.iter().zip(stream.iter()).enumerate() {
        assert_eq!(c ^ k, i as u8);
    }

    for _ in 0..5 {
        assert_eq!(ByteSource::read(&mut reader, &mut buf).unwrap(), 0);
    }
    assert_eq!(reader.state(), StreamState::EndOfStream);
}

#[test]
fn test_file_like_round_trip() {
    let plaintext: Vec<u8> = (0..1000u32).map(|i| (i * 7 % 251) as u8).collect();

    let mut sink = IoSink::new(Vec::new());
    {
        let mut writer = Salsa20Writer::new(&mut sink, &KEY, &NONCE).unwrap();
        for chunk in plaintext.chunks(97) {
            writer.write(chunk).unwrap();
        }
        writer.close().unwrap();
    }
    let ciphertext = sink.into_inner();
    assert_eq!(ciphertext, encrypt(&KEY, &NONCE, &plaintext).unwrap());

    let mut reader = Salsa20Reader::new(IoSource::new(io::Cursor::new(ciphertext)), &KEY, &NONCE)
        .unwrap();
    let mut recovered = Vec::new();
    reader.read_to_end(&mut recovered).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn test_reader_feeds_writer() {
    let plaintext = vec![0xa5u8; 300];
    let mut reader = Salsa20Reader::new(SliceSource::new(&plaintext), &KEY, &NONCE).unwrap();
    let mut sink = VecSink::new();
    {
        let mut writer = Salsa20Writer::new(&mut sink, &KEY, &NONCE).unwrap();
        let mut buf = [0u8; 50];
        loop {
            let n = ByteSource::read(&mut reader, &mut buf).unwrap();
            writer.write(&buf[..n]).unwrap();
            if n < buf.len() {
                break;
            }
        }
    }
    assert_eq!(sink.into_inner(), plaintext);
}

#[test]
fn test_reader_resumes_from_cipher_position() {
    let data = vec![0u8; 64];
    let mut cipher = Salsa20::with_rounds(&KEY, &NONCE, Rounds::R12).unwrap();
    cipher.seek(640);

    let mut reader = Salsa20Reader::from_cipher(SliceSource::new(&data), cipher);
    let mut out = [0u8; 64];
    assert_eq!(ByteSource::read(&mut reader, &mut out), Ok(64));

    let stream = keystream(&KEY, &NONCE, Rounds::R12, 704);
    assert_eq!(&out[..], &stream[640..]);
}

#[test]
fn test_one_shot_matches_cipher() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let ciphertext = encrypt(&KEY, &NONCE, data).unwrap();

    let mut cipher = Salsa20::new(&KEY, &NONCE).unwrap();
    let mut expected = data.to_vec();
    cipher.encrypt(&mut expected);
    assert_eq!(ciphertext, expected);
    assert_eq!(decrypt(&KEY, &NONCE, &ciphertext).unwrap(), data);
}

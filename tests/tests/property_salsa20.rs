//! Property-based tests for the Salsa20 cipher and streaming adapters

use proptest::prelude::*;
use salsastream_algorithms::{RandomGenerator, Rounds, Salsa20};
use salsastream_symmetric::{decrypt, encrypt, ByteSource, Salsa20Reader, SliceSource};

fn rounds() -> impl Strategy<Value = Rounds> {
    prop_oneof![Just(Rounds::R8), Just(Rounds::R12), Just(Rounds::R20)]
}

fn key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

proptest! {
    #[test]
    fn xor_twice_is_identity(
        key in key(),
        nonce in any::<[u8; 8]>(),
        rounds in rounds(),
        data in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let mut cipher = Salsa20::with_rounds(&key, &nonce, rounds).unwrap();
        let mut ciphertext = vec![0u8; data.len()];
        cipher.xor(&data, &mut ciphertext).unwrap();

        cipher.reset();
        let mut recovered = vec![0u8; data.len()];
        cipher.xor(&ciphertext, &mut recovered).unwrap();

        prop_assert_eq!(recovered, data);
    }

    #[test]
    fn reset_replays_fresh_instance(
        key in key(),
        nonce in any::<[u8; 8]>(),
        consumed in 0usize..300,
    ) {
        let mut used = Salsa20::new(&key, &nonce).unwrap();
        let mut fresh = Salsa20::new(&key, &nonce).unwrap();

        let mut scratch = vec![0u8; consumed];
        used.keystream(&mut scratch);
        used.reset();

        let mut a = [0u8; 130];
        let mut b = [0u8; 130];
        used.keystream(&mut a);
        fresh.keystream(&mut b);
        prop_assert_eq!(&a[..], &b[..]);
    }

    #[test]
    fn chunking_does_not_change_output(
        key in key(),
        nonce in any::<[u8; 8]>(),
        data in prop::collection::vec(any::<u8>(), 0..400),
        chunk in 1usize..100,
    ) {
        let whole = encrypt(&key, &nonce, &data).unwrap();

        let mut reader = Salsa20Reader::new(SliceSource::new(&data), &key, &nonce).unwrap();
        let mut pieces = Vec::new();
        let mut buf = vec![0u8; chunk];
        loop {
            let n = reader.read(&mut buf).unwrap();
            pieces.extend_from_slice(&buf[..n]);
            if n < chunk {
                break;
            }
        }

        prop_assert_eq!(&pieces, &whole);
        prop_assert_eq!(reader.read(&mut buf).unwrap(), 0);
        prop_assert_eq!(decrypt(&key, &nonce, &whole).unwrap(), data.clone());
    }

    #[test]
    fn seek_matches_linear_position(
        key in key(),
        nonce in any::<[u8; 8]>(),
        offset in 0u64..1024,
    ) {
        let mut linear = Salsa20::new(&key, &nonce).unwrap();
        let mut stream = vec![0u8; 1024 + 16];
        linear.keystream(&mut stream);

        let mut cipher = Salsa20::new(&key, &nonce).unwrap();
        cipher.seek(offset);
        prop_assert_eq!(cipher.current_pos(), offset);

        let mut window = [0u8; 16];
        cipher.keystream(&mut window);
        let start = offset as usize;
        prop_assert_eq!(&window[..], &stream[start..start + 16]);
    }

    #[test]
    fn integers_follow_byte_order(
        key in key(),
        nonce in any::<[u8; 8]>(),
    ) {
        let mut bytes = Salsa20::new(&key, &nonce).unwrap();
        let mut ints = bytes.clone();

        let mut raw = [0u8; 14];
        bytes.keystream(&mut raw);

        prop_assert_eq!(ints.next_integer::<u64>(), u64::from_le_bytes(raw[..8].try_into().unwrap()));
        prop_assert_eq!(ints.next_integer::<u32>(), u32::from_le_bytes(raw[8..12].try_into().unwrap()));
        prop_assert_eq!(ints.next_integer::<u16>(), u16::from_le_bytes(raw[12..14].try_into().unwrap()));
    }
}

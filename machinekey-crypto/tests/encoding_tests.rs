use machinekey_crypto::{
    base58_encode, checksum, hash_pub_key, license_key, ALPHABET, CHECKSUM_LEN, VERSION,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const PUB: &str = "1680b7a76441d54b2d38941ebcb9885014204780b5ce360af11f180e944548cc\
                   f2c452c8476d89355d123c477e588ca4b3c133eac5efd81609a2bd58e39c6be8";

#[test]
fn alphabet_excludes_ambiguous_symbols() {
    assert_eq!(ALPHABET.len(), 58);
    for c in [b'0', b'O', b'I', b'l'] {
        assert!(!ALPHABET.contains(&c));
    }
}

#[test]
fn pub_key_hash_vector() {
    let pub_key = hex::decode(PUB).unwrap();
    assert_eq!(
        hex::encode(hash_pub_key(&pub_key)),
        "90026015a990f80e415409ac46b32e1d3b1d5f84"
    );
}

#[test]
fn checksum_vector() {
    let pub_key = hex::decode(PUB).unwrap();
    let mut payload = vec![VERSION];
    payload.extend_from_slice(&hash_pub_key(&pub_key));
    assert_eq!(hex::encode(checksum(&payload)), "b3651e04");
    assert_eq!(checksum(&payload).len(), CHECKSUM_LEN);
}

#[test]
fn license_key_vector() {
    let pub_key = hex::decode(PUB).unwrap();
    assert_eq!(license_key(&pub_key), "1E8T9fYBBUemhnStWepZrYJF8sNz6zsuij");
}

#[test]
fn zero_hash_payload_keeps_single_leading_symbol() {
    let mut payload = vec![VERSION, 0, 0];
    payload.extend_from_slice(&[0xAB; 22]);
    let encoded = base58_encode(&payload);
    assert!(encoded.starts_with('1'));
    assert_ne!(&encoded[1..2], "1");
}

proptest! {
    #[test]
    fn exactly_one_leading_symbol(
        zeros in 0usize..6,
        head in 1u8..=255,
        rest in prop::collection::vec(any::<u8>(), 0..30),
    ) {
        let mut payload = vec![0u8; zeros];
        payload.push(head);
        payload.extend_from_slice(&rest);
        let encoded = base58_encode(&payload);
        prop_assert!(encoded.starts_with('1'));
        // `head` is non-zero, so the most significant digit is never zero.
        prop_assert_ne!(encoded.as_bytes()[1], b'1');
    }

    #[test]
    fn encoding_uses_alphabet_only(payload in prop::collection::vec(any::<u8>(), 1..40)) {
        let encoded = base58_encode(&payload);
        prop_assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn leading_zero_count_does_not_matter(
        zeros in 1usize..8,
        tail in prop::collection::vec(any::<u8>(), 0..20),
    ) {
        let mut a = vec![0u8];
        a.extend_from_slice(&tail);
        let mut b = vec![0u8; zeros];
        b.extend_from_slice(&tail);
        prop_assert_eq!(base58_encode(&a), base58_encode(&b));
    }
}

//! End-to-end round-trip laws: obfuscation-time engine → embedded payload
//! → runtime decryptor. The two halves live in separate crates and are
//! kept in sync by hand, so this suite doubles as the sync check.

use polyveil::{decrypt_poly, encode, EncryptedRecord, Engine, KeyMaterial, Variant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn runtime_decrypt(record: &EncryptedRecord, keys: &[u8]) -> String {
    decrypt_poly(
        &record.ciphertext,
        keys,
        record.call_site_key,
        record.variant.tag(),
    )
}

// ═══ Concrete scenarios ═══

#[test]
fn single_byte_key_material_variant0() {
    let keys = [0x5Au8];
    let mut buf = encode::utf16_bytes("AB");
    Variant::Xor.encrypt_in_place(&mut buf, &keys, 7);
    assert_eq!(decrypt_poly(&buf, &keys, 7, 0), "AB");
}

#[test]
fn variant1_ciphertext_differs_from_variant0() {
    let keys = [0x5Au8];
    let mut v0 = encode::utf16_bytes("AB");
    let mut v1 = v0.clone();
    Variant::Xor.encrypt_in_place(&mut v0, &keys, 7);
    Variant::XorRotate.encrypt_in_place(&mut v1, &keys, 7);
    assert_ne!(v0, v1);
    assert_eq!(decrypt_poly(&v1, &keys, 7, 1), "AB");
}

#[test]
fn empty_string_empty_ciphertext_everywhere() {
    let keys = [0x5Au8, 0x11];
    for variant in Variant::ALL {
        for key in [0, 7, -42, i32::MAX, i32::MIN] {
            let mut buf = encode::utf16_bytes("");
            variant.encrypt_in_place(&mut buf, &keys, key);
            assert!(buf.is_empty());
            assert_eq!(decrypt_poly(&buf, &keys, key, variant.tag()), "");
        }
    }
}

#[test]
fn negative_key_variant2_roundtrips() {
    // Exercises the sign byte in the derived key stream and the
    // wrapping add/sub of the low key byte.
    let keys = [0x5Au8];
    let mut buf = encode::utf16_bytes("AB");
    Variant::XorAdd.encrypt_in_place(&mut buf, &keys, -42);
    assert_eq!(decrypt_poly(&buf, &keys, -42, 2), "AB");
}

// ═══ Round-trip law, engine through runtime ═══

#[test]
fn engine_to_runtime_random_bulk() {
    let mut rng = StdRng::seed_from_u64(0xA11CE);
    for round in 0..500 {
        let key_len = rng.gen_range(1..24);
        let key_bytes: Vec<u8> = (0..key_len).map(|_| rng.gen()).collect();
        let keys = KeyMaterial::from_bytes(key_bytes).unwrap();
        let mut engine = Engine::new(keys, round);

        let len = rng.gen_range(0..40);
        let plain: String = (0..len).map(|_| rng.gen::<char>()).collect();
        let call_site_key: i32 = rng.gen();

        let record = engine.encrypt(&plain, call_site_key);
        assert_eq!(
            runtime_decrypt(&record, engine.key_material().as_bytes()),
            plain,
            "round {}: variant {:?}, key {}",
            round,
            record.variant,
            call_site_key
        );
    }
}

#[test]
fn engine_to_runtime_extreme_keys() {
    let mut rng = StdRng::seed_from_u64(0xBEE);
    let keys = KeyMaterial::generate(8, &mut rng).unwrap();
    let mut engine = Engine::new(keys, 99);
    for key in [0, 1, -1, 255, 256, -256, i32::MAX, i32::MIN] {
        let record = engine.encrypt("edge-of-range", key);
        assert_eq!(
            runtime_decrypt(&record, engine.key_material().as_bytes()),
            "edge-of-range"
        );
    }
}

#[test]
fn engine_to_runtime_surrogate_pairs() {
    let keys = KeyMaterial::from_bytes(vec![0xAB, 0xCD]).unwrap();
    let mut engine = Engine::new(keys, 4);
    for s in ["🎉", "a🦀b", "\u{10000}\u{10FFFF}", "日本語テスト🎉"] {
        let record = engine.encrypt(s, -7);
        assert_eq!(runtime_decrypt(&record, engine.key_material().as_bytes()), s);
    }
}

// ═══ Obfuscation effectiveness ═══

#[test]
fn ciphertext_differs_from_plaintext_encoding() {
    let mut rng = StdRng::seed_from_u64(0xD1FF);
    let mut matches = 0usize;
    const SAMPLES: usize = 200;
    for round in 0..SAMPLES {
        let keys = KeyMaterial::generate(rng.gen_range(1..16), &mut rng).unwrap();
        let mut engine = Engine::new(keys, round as u64);
        let len = rng.gen_range(1..30);
        let plain: String = (0..len).map(|_| rng.gen::<char>()).collect();
        let record = engine.encrypt(&plain, rng.gen());
        if record.ciphertext == encode::utf16_bytes(&plain) {
            matches += 1;
        }
    }
    assert!(
        matches <= SAMPLES / 100,
        "{} of {} ciphertexts identical to plaintext encoding",
        matches,
        SAMPLES
    );
}

#[test]
fn variants_produce_distinct_ciphertexts() {
    let mut rng = StdRng::seed_from_u64(0x1DEA);
    const SAMPLES: usize = 100;
    let mut fully_distinct = 0usize;
    for _ in 0..SAMPLES {
        let key_bytes: Vec<u8> = (0..rng.gen_range(1..12)).map(|_| rng.gen()).collect();
        let len = rng.gen_range(1..20);
        let plain: String = (0..len).map(|_| rng.gen::<char>()).collect();
        let call_site_key: i32 = rng.gen();

        let encoded = encode::utf16_bytes(&plain);
        let mut outputs = Vec::new();
        for variant in Variant::ALL {
            let mut buf = encoded.clone();
            variant.encrypt_in_place(&mut buf, &key_bytes, call_site_key);
            outputs.push(buf);
        }
        if outputs[0] != outputs[1] && outputs[0] != outputs[2] && outputs[1] != outputs[2] {
            fully_distinct += 1;
        }
    }
    assert!(
        fully_distinct >= SAMPLES * 9 / 10,
        "only {} of {} samples gave three distinct ciphertexts",
        fully_distinct,
        SAMPLES
    );
}

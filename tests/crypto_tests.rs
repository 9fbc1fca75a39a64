// tests/crypto_tests.rs
mod common;
use common::{payload, setup, KEY, MESSAGE};

use lime_security::consts::DEFAULT_IV;
use lime_security::core::{base64_decode, base64_encode, derive_key_material, hex_encode};
use lime_security::{decrypt, encrypt, AesCipher, CipherMode, CoreError};
use proptest::prelude::*;

#[test]
fn test_key_generation_matches_seeded_sha1prng() {
    let key = derive_key_material(KEY.as_bytes()).unwrap();
    assert_eq!(
        hex_encode(key.expose_secret()),
        "d10665cbcba8e3f444a3ffb3169a5717"
    );

    let key = derive_key_material(b"key").unwrap();
    assert_eq!(
        hex_encode(key.expose_secret()),
        "989f1b3366408a98bfc96af4555d762f"
    );
}

#[test]
fn test_key_generation_never_returns_the_seed() {
    let key = derive_key_material(KEY.as_bytes()).unwrap();
    assert_ne!(key.expose_secret().as_slice(), KEY.as_bytes());
}

#[test]
fn test_empty_key_is_rejected() {
    let result = encrypt(CipherMode::EcbPkcs7, b"data", b"");
    assert!(matches!(result, Err(CoreError::EmptyKey)));
}

#[test]
fn test_known_ciphertexts_for_each_mode() {
    setup();
    let cases = [
        (CipherMode::Default, "7DOYD5wQZwepuddVWwskGw=="),
        (CipherMode::EcbPkcs7, "7DOYD5wQZwepuddVWwskGw=="),
        (CipherMode::CbcPkcs7, "lK/RU5JJc6dlBqMBu6rmww=="),
        (CipherMode::CfbPkcs7, "s4NpOBemOMOlBQBszH7/dg=="),
        (CipherMode::CfbNoPadding, "s4NpOA=="),
    ];

    for (mode, expected) in cases {
        let ciphertext = encrypt(mode, MESSAGE.as_bytes(), KEY.as_bytes()).unwrap();
        assert_eq!(base64_encode(&ciphertext), expected, "mode {mode}");
    }

    let block = encrypt(CipherMode::CbcNoPadding, b"0123456789abcdef", KEY.as_bytes()).unwrap();
    assert_eq!(base64_encode(&block), "QKaAM7iSwuhuFu1YSJBosQ==");
}

#[test]
fn test_ecb_lime_roundtrip_through_base64() {
    let ciphertext = encrypt(CipherMode::EcbPkcs7, MESSAGE.as_bytes(), KEY.as_bytes()).unwrap();
    let text = base64_encode(&ciphertext);

    assert_eq!(base64_decode(&text).unwrap(), ciphertext);

    let plaintext = decrypt(CipherMode::EcbPkcs7, &ciphertext, KEY.as_bytes()).unwrap();
    assert_eq!(plaintext, MESSAGE.as_bytes());
}

#[test]
fn test_roundtrip_every_mode() {
    let key = b"another key of arbitrary length";
    for mode in CipherMode::ALL {
        for len in [0, 1, 15, 16, 17, 32, 100] {
            let mut plaintext = payload(len);
            if mode == CipherMode::CbcNoPadding {
                plaintext.truncate(len / 16 * 16);
            }
            let ciphertext = encrypt(mode, &plaintext, key).unwrap();
            let decrypted = decrypt(mode, &ciphertext, key).unwrap();
            assert_eq!(decrypted, plaintext, "mode {mode}, len {len}");
        }
    }
}

#[test]
fn test_encryption_is_deterministic() {
    for mode in CipherMode::ALL {
        let plaintext = payload(48);
        let first = encrypt(mode, &plaintext, KEY.as_bytes()).unwrap();
        let second = encrypt(mode, &plaintext, KEY.as_bytes()).unwrap();
        assert_eq!(first, second, "mode {mode}");
    }
}

#[test]
fn test_padded_modes_grow_to_next_block() {
    for mode in [CipherMode::EcbPkcs7, CipherMode::CbcPkcs7, CipherMode::CfbPkcs7] {
        assert_eq!(encrypt(mode, &payload(15), KEY.as_bytes()).unwrap().len(), 16);
        assert_eq!(encrypt(mode, &payload(16), KEY.as_bytes()).unwrap().len(), 32);
    }
}

#[test]
fn test_cfb_nopadding_keeps_length() {
    let ciphertext = encrypt(CipherMode::CfbNoPadding, &payload(21), KEY.as_bytes()).unwrap();
    assert_eq!(ciphertext.len(), 21);
}

#[test]
fn test_cbc_nopadding_enforces_block_size() {
    let result = encrypt(CipherMode::CbcNoPadding, &payload(17), KEY.as_bytes());
    assert!(matches!(result, Err(CoreError::BlockSize { len: 17 })));

    let ciphertext = encrypt(CipherMode::CbcNoPadding, &payload(32), KEY.as_bytes()).unwrap();
    assert_eq!(ciphertext.len(), 32);
}

#[test]
fn test_decrypt_rejects_partial_blocks() {
    for mode in [
        CipherMode::EcbPkcs7,
        CipherMode::CbcNoPadding,
        CipherMode::CbcPkcs7,
        CipherMode::CfbPkcs7,
    ] {
        let result = decrypt(mode, &payload(15), KEY.as_bytes());
        assert!(
            matches!(result, Err(CoreError::BlockSize { len: 15 })),
            "mode {mode}"
        );
    }
}

#[test]
fn test_flipped_last_byte_is_a_padding_error() {
    let mut ciphertext =
        encrypt(CipherMode::EcbPkcs7, MESSAGE.as_bytes(), KEY.as_bytes()).unwrap();
    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 0x01;

    let result = decrypt(CipherMode::EcbPkcs7, &ciphertext, KEY.as_bytes());
    assert!(matches!(result, Err(CoreError::Padding)));
}

#[test]
fn test_decrypt_fails_with_wrong_key() {
    let ciphertext = encrypt(CipherMode::EcbPkcs7, MESSAGE.as_bytes(), KEY.as_bytes()).unwrap();
    let wrong = decrypt(CipherMode::EcbPkcs7, &ciphertext, b"wrong-key");
    assert!(matches!(wrong, Err(CoreError::Padding)));
}

#[test]
fn test_raw_key_ciphertext_does_not_decrypt() {
    // "Lime" under AES/ECB/PKCS5Padding keyed with the raw 16 bytes of KEY
    let raw_keyed = "BZMhjcgOVFRmT6hLE0VMJg==";
    let engine = AesCipher::new();

    let result = engine.decrypt_from_text(CipherMode::EcbPkcs7, raw_keyed, KEY);
    assert!(matches!(result, Err(CoreError::Padding)));

    let ours = engine.encrypt_to_text(CipherMode::EcbPkcs7, MESSAGE, KEY).unwrap();
    assert_ne!(ours, raw_keyed);
}

#[test]
fn test_none_mode_behaves_as_default() {
    let engine = AesCipher::new();
    let implicit = engine.encrypt(None, MESSAGE.as_bytes(), KEY.as_bytes()).unwrap();
    let explicit = engine
        .encrypt(CipherMode::Default, MESSAGE.as_bytes(), KEY.as_bytes())
        .unwrap();
    assert_eq!(implicit, explicit);
    assert_eq!(
        engine.decrypt(None, &implicit, KEY.as_bytes()).unwrap(),
        MESSAGE.as_bytes()
    );
}

#[test]
fn test_custom_iv_changes_chaining_modes_only() {
    let custom = AesCipher::with_iv(std::array::from_fn(|i| i as u8));
    let default = AesCipher::new();

    let cbc = custom
        .encrypt(CipherMode::CbcPkcs7, MESSAGE.as_bytes(), KEY.as_bytes())
        .unwrap();
    assert_eq!(base64_encode(&cbc), "SDPZWS33Xwaij9rZQ4PU6g==");
    assert_ne!(
        cbc,
        default
            .encrypt(CipherMode::CbcPkcs7, MESSAGE.as_bytes(), KEY.as_bytes())
            .unwrap()
    );

    let ecb_custom = custom
        .encrypt(CipherMode::EcbPkcs7, MESSAGE.as_bytes(), KEY.as_bytes())
        .unwrap();
    let ecb_default = default
        .encrypt(CipherMode::EcbPkcs7, MESSAGE.as_bytes(), KEY.as_bytes())
        .unwrap();
    assert_eq!(ecb_custom, ecb_default);
}

#[test]
fn test_iv_slice_must_be_one_block() {
    assert!(AesCipher::from_iv_slice(&DEFAULT_IV).is_ok());
    assert!(matches!(
        AesCipher::from_iv_slice(&[0u8; 8]),
        Err(CoreError::InvalidIv { len: 8 })
    ));
}

#[test]
fn test_global_engine_uses_documented_iv() {
    assert_eq!(AesCipher::global().iv(), &DEFAULT_IV);
    assert_eq!(&DEFAULT_IV[..8], b"LIMElime");
}

#[test]
fn test_engine_is_shared_across_threads() {
    let engine = AesCipher::new();
    let expected = engine
        .encrypt(CipherMode::CbcPkcs7, &payload(64), KEY.as_bytes())
        .unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let ciphertext = engine
                        .encrypt(CipherMode::CbcPkcs7, &payload(64), KEY.as_bytes())
                        .unwrap();
                    assert_eq!(ciphertext, expected);
                    let plaintext = engine
                        .decrypt(CipherMode::CbcPkcs7, &ciphertext, KEY.as_bytes())
                        .unwrap();
                    assert_eq!(plaintext, payload(64));
                }
            });
        }
    });
}

proptest! {
    #[test]
    fn prop_roundtrip_any_key_any_data(
        data in proptest::collection::vec(any::<u8>(), 0..200),
        key in proptest::collection::vec(any::<u8>(), 1..40),
    ) {
        for mode in CipherMode::ALL {
            let mut plaintext = data.clone();
            if mode == CipherMode::CbcNoPadding {
                plaintext.truncate(plaintext.len() / 16 * 16);
            }
            let ciphertext = encrypt(mode, &plaintext, &key).unwrap();
            prop_assert_eq!(decrypt(mode, &ciphertext, &key).unwrap(), plaintext);
        }
    }
}

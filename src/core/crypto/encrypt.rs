// src/core/crypto/encrypt.rs
use aes::Aes128;
use cipher::block_padding::{NoPadding, Pkcs7};
use cipher::{AsyncStreamCipher, Block, BlockEncryptMut, Key, KeyInit, KeyIvInit};
use tracing::debug;

use crate::enums::{BlockMode, CipherMode, Padding};

use super::engine::{check_alignment, AesCipher, Result};
use super::key::derive_key_material;
use super::mode::resolve_mode;

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CfbEnc = cfb_mode::Encryptor<Aes128>;

impl AesCipher {
    /// Encrypt `plaintext` under the key generated from `key_seed`.
    ///
    /// `CbcNoPadding` requires a whole number of 16-byte blocks.
    pub fn encrypt(
        &self,
        mode: impl Into<Option<CipherMode>>,
        plaintext: &[u8],
        key_seed: &[u8],
    ) -> Result<Vec<u8>> {
        let spec = resolve_mode(mode);
        check_alignment(&spec, plaintext.len(), false)?;

        let key = derive_key_material(key_seed)?;
        let key: Key<Aes128> = (*key.expose_secret()).into();
        let iv: Block<Aes128> = (*self.iv()).into();

        debug!(transform = spec.transform(), len = plaintext.len(), "encrypt");

        let ciphertext = match (spec.block_mode, spec.padding) {
            (BlockMode::Ecb, Padding::Pkcs7) => {
                Aes128EcbEnc::new(&key).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
            }
            (BlockMode::Ecb, Padding::None) => {
                Aes128EcbEnc::new(&key).encrypt_padded_vec_mut::<NoPadding>(plaintext)
            }
            (BlockMode::Cbc, Padding::Pkcs7) => {
                Aes128CbcEnc::new(&key, &iv).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
            }
            (BlockMode::Cbc, Padding::None) => {
                Aes128CbcEnc::new(&key, &iv).encrypt_padded_vec_mut::<NoPadding>(plaintext)
            }
            (BlockMode::Cfb, Padding::Pkcs7) => {
                Aes128CfbEnc::new(&key, &iv).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
            }
            (BlockMode::Cfb, Padding::None) => {
                let mut buf = plaintext.to_vec();
                Aes128CfbEnc::new(&key, &iv).encrypt(&mut buf);
                buf
            }
        };

        Ok(ciphertext)
    }
}

/// Encrypt with the process-wide engine
pub fn encrypt(
    mode: impl Into<Option<CipherMode>>,
    plaintext: &[u8],
    key_seed: &[u8],
) -> Result<Vec<u8>> {
    AesCipher::global().encrypt(mode, plaintext, key_seed)
}

// src/core/crypto/decrypt.rs
use aes::Aes128;
use cipher::block_padding::{NoPadding, Pkcs7};
use cipher::{AsyncStreamCipher, Block, BlockDecryptMut, Key, KeyInit, KeyIvInit};
use tracing::debug;

use crate::enums::{BlockMode, CipherMode, Padding};

use super::engine::{check_alignment, AesCipher, Result};
use super::key::derive_key_material;
use super::mode::resolve_mode;

type Aes128EcbDec = ecb::Decryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes128CfbDec = cfb_mode::Decryptor<Aes128>;

impl AesCipher {
    /// Decrypt `ciphertext` under the key generated from `key_seed`.
    ///
    /// Block modes need a whole number of 16-byte blocks; PKCS#7 modes
    /// fail with [`CoreError::Padding`](crate::CoreError::Padding) on bad padding.
    pub fn decrypt(
        &self,
        mode: impl Into<Option<CipherMode>>,
        ciphertext: &[u8],
        key_seed: &[u8],
    ) -> Result<Vec<u8>> {
        let spec = resolve_mode(mode);
        check_alignment(&spec, ciphertext.len(), true)?;

        let key = derive_key_material(key_seed)?;
        let key: Key<Aes128> = (*key.expose_secret()).into();
        let iv: Block<Aes128> = (*self.iv()).into();

        debug!(transform = spec.transform(), len = ciphertext.len(), "decrypt");

        let plaintext = match (spec.block_mode, spec.padding) {
            (BlockMode::Ecb, Padding::Pkcs7) => {
                Aes128EcbDec::new(&key).decrypt_padded_vec_mut::<Pkcs7>(ciphertext)?
            }
            (BlockMode::Ecb, Padding::None) => {
                Aes128EcbDec::new(&key).decrypt_padded_vec_mut::<NoPadding>(ciphertext)?
            }
            (BlockMode::Cbc, Padding::Pkcs7) => {
                Aes128CbcDec::new(&key, &iv).decrypt_padded_vec_mut::<Pkcs7>(ciphertext)?
            }
            (BlockMode::Cbc, Padding::None) => {
                Aes128CbcDec::new(&key, &iv).decrypt_padded_vec_mut::<NoPadding>(ciphertext)?
            }
            (BlockMode::Cfb, Padding::Pkcs7) => {
                Aes128CfbDec::new(&key, &iv).decrypt_padded_vec_mut::<Pkcs7>(ciphertext)?
            }
            (BlockMode::Cfb, Padding::None) => {
                let mut buf = ciphertext.to_vec();
                Aes128CfbDec::new(&key, &iv).decrypt(&mut buf);
                buf
            }
        };

        Ok(plaintext)
    }
}

/// Decrypt with the process-wide engine
pub fn decrypt(
    mode: impl Into<Option<CipherMode>>,
    ciphertext: &[u8],
    key_seed: &[u8],
) -> Result<Vec<u8>> {
    AesCipher::global().decrypt(mode, ciphertext, key_seed)
}

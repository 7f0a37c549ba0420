// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

use std::sync::Arc;

use vaultkey::traits::{AsymmetricKey, RemoteKeyClient};
use vaultkey::{
    EncryptionPadding, HashAlgorithm, KeyIdentifier, SignaturePadding, VaultKeyError,
};
use vaultkey_crypto::{digest, VaultPublicKey};

use crate::{bridge, VaultContext};

/// Exported RSA public parameters, big-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicParameters {
    pub modulus: Vec<u8>,
    pub exponent: Vec<u8>,
}

/// RSA adapter over a remote vault key. Presents the conventional
/// synchronous surface: `sign`/`decrypt` block the calling thread while
/// the remote call runs on the bridge runtime; `verify`/`encrypt` and
/// parameter export are purely local.
///
/// The default value is uninitialized; every operation on it fails with
/// `InvalidOperation` before reaching the remote capability.
#[derive(Clone, Default)]
pub struct VaultRsa {
    context: VaultContext,
}

impl VaultRsa {
    pub fn new(context: VaultContext) -> Result<Self, VaultKeyError> {
        if !context.is_valid() {
            return Err(VaultKeyError::InvalidArgument(
                "context is not initialized".to_string(),
            ));
        }
        Ok(Self { context })
    }

    pub fn from_key(
        client: Arc<dyn RemoteKeyClient>,
        key: KeyIdentifier,
        public_key: VaultPublicKey,
    ) -> Result<Self, VaultKeyError> {
        Self::new(VaultContext::from_key(client, key, public_key))
    }

    pub fn from_certificate(
        client: Arc<dyn RemoteKeyClient>,
        key: KeyIdentifier,
        certificate: &[u8],
    ) -> Result<Self, VaultKeyError> {
        Self::new(VaultContext::from_certificate(client, key, certificate)?)
    }

    /// The inner context. Non-blocking callers can use its asynchronous
    /// operations directly and skip the bridge.
    pub fn context(&self) -> &VaultContext {
        &self.context
    }

    fn public_key(&self) -> Result<&VaultPublicKey, VaultKeyError> {
        self.context
            .public_key()
            .ok_or(VaultKeyError::InvalidOperation)
    }

    pub fn public_parameters(&self) -> Result<RsaPublicParameters, VaultKeyError> {
        let key = self.public_key()?;
        Ok(RsaPublicParameters {
            modulus: key.modulus(),
            exponent: key.exponent(),
        })
    }

    /// Private key material never resides locally.
    pub fn private_parameters(&self) -> Result<RsaPublicParameters, VaultKeyError> {
        Err(VaultKeyError::NotSupported(
            "private key material is held by the remote vault",
        ))
    }

    pub fn to_spki_der(&self) -> Result<Vec<u8>, VaultKeyError> {
        self.public_key()?.to_spki_der()
    }
}

impl AsymmetricKey for VaultRsa {
    fn key_size(&self) -> Result<usize, VaultKeyError> {
        Ok(self.public_key()?.key_size_bits())
    }

    fn sign(
        &self,
        data: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<Vec<u8>, VaultKeyError> {
        self.sign_digest(&digest::compute(hash, data), hash, padding)
    }

    fn sign_digest(
        &self,
        digest: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<Vec<u8>, VaultKeyError> {
        if !self.context.is_valid() {
            return Err(VaultKeyError::InvalidOperation);
        }
        let context = self.context.clone();
        let digest = digest.to_vec();
        bridge::wait(async move { context.sign_digest(&digest, hash, padding).await })?
    }

    fn verify(
        &self,
        data: &[u8],
        signature: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<bool, VaultKeyError> {
        self.public_key()?.verify(data, signature, hash, padding)
    }

    fn verify_digest(
        &self,
        digest: &[u8],
        signature: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<bool, VaultKeyError> {
        self.public_key()?
            .verify_digest(digest, signature, hash, padding)
    }

    fn encrypt(
        &self,
        plaintext: &[u8],
        padding: EncryptionPadding,
    ) -> Result<Vec<u8>, VaultKeyError> {
        self.public_key()?.encrypt(plaintext, padding)
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        padding: EncryptionPadding,
    ) -> Result<Vec<u8>, VaultKeyError> {
        if !self.context.is_valid() {
            return Err(VaultKeyError::InvalidOperation);
        }
        let context = self.context.clone();
        let ciphertext = ciphertext.to_vec();
        bridge::wait(async move { context.decrypt_data(&ciphertext, padding).await })?
    }
}

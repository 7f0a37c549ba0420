// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    EncryptionPadding, HashAlgorithm, KeyIdentifier, SignaturePadding, VaultKeyError,
};

/// Failure reported by the remote capability. Preserved as the source of
/// `VaultKeyError::RemoteOperationFailed` for diagnostics.
#[derive(Debug, Clone, Error)]
pub enum RemoteError {
    #[error("authentication rejected: {0}")]
    Unauthorized(String),
    #[error("key not found: {0}")]
    KeyNotFound(String),
    #[error("key is disabled: {0}")]
    KeyDisabled(String),
    #[error("request throttled: {0}")]
    Throttled(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service error {code}: {message}")]
    Service { code: u16, message: String },
    #[error("operation cancelled")]
    Cancelled,
}

/// The remote signing/decryption capability. Implementations talk to the
/// vault service; the private key never crosses this boundary. `algorithm`
/// is always one of the fixed identifiers produced by the translation
/// tables, never an invented value.
///
/// Implementations must support concurrent outstanding calls; the adapter
/// issues them from many threads against one shared instance.
#[async_trait]
pub trait RemoteKeyClient: Send + Sync {
    async fn sign(
        &self,
        key: &KeyIdentifier,
        algorithm: &str,
        digest: &[u8],
    ) -> Result<Vec<u8>, RemoteError>;

    async fn decrypt(
        &self,
        key: &KeyIdentifier,
        algorithm: &str,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, RemoteError>;
}

/// The conventional synchronous asymmetric-key surface. Signing and
/// decryption may be backed by remote calls; verification, encryption and
/// parameter export are always local.
pub trait AsymmetricKey {
    /// Key size in bits, derived from the public key.
    fn key_size(&self) -> Result<usize, VaultKeyError>;

    fn sign(
        &self,
        data: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<Vec<u8>, VaultKeyError>;

    /// Sign a precomputed digest of `hash`.
    fn sign_digest(
        &self,
        digest: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<Vec<u8>, VaultKeyError>;

    /// Returns `Ok(false)` on signature mismatch, an error only for
    /// malformed input.
    fn verify(
        &self,
        data: &[u8],
        signature: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<bool, VaultKeyError>;

    fn verify_digest(
        &self,
        digest: &[u8],
        signature: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<bool, VaultKeyError>;

    fn encrypt(
        &self,
        plaintext: &[u8],
        padding: EncryptionPadding,
    ) -> Result<Vec<u8>, VaultKeyError>;

    fn decrypt(
        &self,
        ciphertext: &[u8],
        padding: EncryptionPadding,
    ) -> Result<Vec<u8>, VaultKeyError>;
}

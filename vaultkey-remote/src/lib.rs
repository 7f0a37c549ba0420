// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

mod bridge;
pub mod rsa;

pub use crate::rsa::{RsaPublicParameters, VaultRsa};

use std::sync::Arc;

use tracing::debug;
use vaultkey::traits::{RemoteError, RemoteKeyClient};
use vaultkey::{
    EncryptionPadding, HashAlgorithm, KeyIdentifier, SignaturePadding, VaultKeyError,
};
use vaultkey_crypto::{digest, translate, VaultPublicKey};

/// Immutable signing context: the remote capability, the key it signs
/// with, the published public key and (when constructed from one) the
/// public certificate. The default value is the uninitialized sentinel;
/// check [`VaultContext::is_valid`] before use.
///
/// Holds no per-operation state, so one context is shared freely across
/// threads; concurrency reduces to the client's own thread-safety.
#[derive(Clone, Default)]
pub struct VaultContext {
    client: Option<Arc<dyn RemoteKeyClient>>,
    key: Option<KeyIdentifier>,
    public_key: Option<VaultPublicKey>,
    certificate: Option<Vec<u8>>,
}

impl VaultContext {
    /// Build a context from a remote key's published public material.
    pub fn from_key(
        client: Arc<dyn RemoteKeyClient>,
        key: KeyIdentifier,
        public_key: VaultPublicKey,
    ) -> Self {
        Self {
            client: Some(client),
            key: Some(key),
            public_key: Some(public_key),
            certificate: None,
        }
    }

    /// Build a context from a public certificate (DER). The certificate
    /// must carry an RSA key; it is retained for callers that need the
    /// certificate alongside signatures.
    pub fn from_certificate(
        client: Arc<dyn RemoteKeyClient>,
        key: KeyIdentifier,
        certificate: &[u8],
    ) -> Result<Self, VaultKeyError> {
        let public_key = VaultPublicKey::from_certificate_der(certificate)?;
        Ok(Self {
            client: Some(client),
            key: Some(key),
            public_key: Some(public_key),
            certificate: Some(certificate.to_vec()),
        })
    }

    /// True iff properly constructed. False for the default sentinel.
    pub fn is_valid(&self) -> bool {
        self.client.is_some() && self.key.is_some() && self.public_key.is_some()
    }

    pub fn key_identifier(&self) -> Option<&KeyIdentifier> {
        self.key.as_ref()
    }

    pub fn public_key(&self) -> Option<&VaultPublicKey> {
        self.public_key.as_ref()
    }

    /// DER of the certificate this context was constructed from, if any.
    pub fn certificate(&self) -> Option<&[u8]> {
        self.certificate.as_deref()
    }

    fn parts(&self) -> Result<(&Arc<dyn RemoteKeyClient>, &KeyIdentifier), VaultKeyError> {
        match (&self.client, &self.key, &self.public_key) {
            (Some(client), Some(key), Some(_)) => Ok((client, key)),
            _ => Err(VaultKeyError::InvalidOperation),
        }
    }

    /// Sign a precomputed digest with the remote key. One remote call, no
    /// retry; the first failure surfaces with its cause attached.
    pub async fn sign_digest(
        &self,
        digest_bytes: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<Vec<u8>, VaultKeyError> {
        let (client, key) = self.parts()?;
        if digest_bytes.len() != hash.digest_len() {
            return Err(VaultKeyError::InvalidArgument(format!(
                "digest is {} bytes, expected {} for {:?}",
                digest_bytes.len(),
                hash.digest_len(),
                hash
            )));
        }
        let algorithm = translate::signature_algorithm(hash, padding)?;
        // The SHA-1 path signs a raw DigestInfo structure; every other
        // algorithm takes the digest as-is.
        let payload = if hash == HashAlgorithm::Sha1 {
            digest::wrap_sha1(digest_bytes)?
        } else {
            digest_bytes.to_vec()
        };
        debug!(key = %key, algorithm, "issuing remote sign");
        let signature = client
            .sign(key, algorithm, &payload)
            .await
            .map_err(map_remote)?;
        debug!(key = %key, algorithm, len = signature.len(), "remote sign completed");
        Ok(signature)
    }

    /// Decrypt ciphertext with the remote key.
    pub async fn decrypt_data(
        &self,
        ciphertext: &[u8],
        padding: EncryptionPadding,
    ) -> Result<Vec<u8>, VaultKeyError> {
        let (client, key) = self.parts()?;
        if ciphertext.is_empty() {
            return Err(VaultKeyError::InvalidArgument(
                "ciphertext is empty".to_string(),
            ));
        }
        let algorithm = translate::encryption_algorithm(padding);
        debug!(key = %key, algorithm, "issuing remote decrypt");
        client
            .decrypt(key, algorithm, ciphertext)
            .await
            .map_err(map_remote)
    }
}

fn map_remote(error: RemoteError) -> VaultKeyError {
    match error {
        RemoteError::Cancelled => VaultKeyError::Cancelled,
        other => VaultKeyError::RemoteOperationFailed(other),
    }
}

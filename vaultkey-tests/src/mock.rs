// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use rsa::{Oaep, Pkcs1v15Encrypt, Pkcs1v15Sign, Pss, RsaPrivateKey};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use vaultkey::traits::{RemoteError, RemoteKeyClient};
use vaultkey::KeyIdentifier;

/// In-process stand-in for the vault service, backed by a reference
/// private key. Dispatches on the *string* algorithm identifiers so the
/// wire vocabulary itself is exercised, the way the real service would
/// interpret it.
pub struct MockVaultClient {
    key: RsaPrivateKey,
    delay_ms: Option<Range<u64>>,
    failure: Option<RemoteError>,
    calls: AtomicUsize,
}

impl MockVaultClient {
    pub fn new(key: RsaPrivateKey) -> Self {
        Self {
            key,
            delay_ms: None,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Complete each call only after a randomized pause.
    pub fn with_delay(mut self, delay_ms: Range<u64>) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Report `failure` on every call instead of operating.
    pub fn with_failure(mut self, failure: RemoteError) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Number of remote calls received, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(range) = &self.delay_ms {
            let ms = rand::thread_rng().gen_range(range.clone());
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

#[async_trait]
impl RemoteKeyClient for MockVaultClient {
    async fn sign(
        &self,
        _key: &KeyIdentifier,
        algorithm: &str,
        digest: &[u8],
    ) -> Result<Vec<u8>, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        self.pause().await;
        let result = match algorithm {
            // RSNULL is the raw private-key operation: the payload already
            // carries the full DigestInfo.
            "RSNULL" => self.key.sign(Pkcs1v15Sign::new_unprefixed(), digest),
            "RS256" => self.key.sign(Pkcs1v15Sign::new::<Sha256>(), digest),
            "RS384" => self.key.sign(Pkcs1v15Sign::new::<Sha384>(), digest),
            "RS512" => self.key.sign(Pkcs1v15Sign::new::<Sha512>(), digest),
            "PS256" => {
                self.key
                    .sign_with_rng(&mut rand::thread_rng(), Pss::new::<Sha256>(), digest)
            }
            "PS384" => {
                self.key
                    .sign_with_rng(&mut rand::thread_rng(), Pss::new::<Sha384>(), digest)
            }
            "PS512" => {
                self.key
                    .sign_with_rng(&mut rand::thread_rng(), Pss::new::<Sha512>(), digest)
            }
            other => {
                return Err(RemoteError::Service {
                    code: 400,
                    message: format!("unsupported signing algorithm {}", other),
                })
            }
        };
        result.map_err(|e| RemoteError::Service {
            code: 500,
            message: e.to_string(),
        })
    }

    async fn decrypt(
        &self,
        _key: &KeyIdentifier,
        algorithm: &str,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        self.pause().await;
        let result = match algorithm {
            "RSA1_5" => self.key.decrypt(Pkcs1v15Encrypt, ciphertext),
            "RSA-OAEP" => self.key.decrypt(Oaep::new::<Sha1>(), ciphertext),
            "RSA-OAEP-256" => self.key.decrypt(Oaep::new::<Sha256>(), ciphertext),
            other => {
                return Err(RemoteError::Service {
                    code: 400,
                    message: format!("unsupported encryption algorithm {}", other),
                })
            }
        };
        result.map_err(|e| RemoteError::Service {
            code: 500,
            message: e.to_string(),
        })
    }
}

// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

#![allow(dead_code)]

pub mod mock;

mod concurrent;
mod context;
mod digesting;
mod encryption;
mod mapping;
mod signing;

use std::sync::{Arc, OnceLock};

use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use url::Url;
use vaultkey::traits::RemoteKeyClient;
use vaultkey::KeyIdentifier;
use vaultkey_crypto::VaultPublicKey;
use vaultkey_remote::VaultRsa;

use crate::mock::MockVaultClient;

/// One reference private key per test binary; generation is the slow part.
pub fn reference_key() -> RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("generating RSA test key")
    })
    .clone()
}

pub fn reference_public() -> VaultPublicKey {
    let public = reference_key().to_public_key();
    VaultPublicKey::from_components(&public.n().to_bytes_be(), &public.e().to_bytes_be())
        .expect("building public key from reference components")
}

pub fn signing_key_identifier() -> KeyIdentifier {
    let vault = Url::parse("https://unit.vault.example").expect("vault url");
    KeyIdentifier::with_version(vault, "signing", "7c0d45ae").expect("key identifier")
}

pub fn adapter_with(client: MockVaultClient) -> (VaultRsa, Arc<MockVaultClient>) {
    let client = Arc::new(client);
    let remote: Arc<dyn RemoteKeyClient> = client.clone();
    let adapter = VaultRsa::from_key(remote, signing_key_identifier(), reference_public())
        .expect("building adapter");
    (adapter, client)
}

/// Install a subscriber once so RUST_LOG surfaces bridge and remote-call
/// events during test runs.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

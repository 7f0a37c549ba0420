// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

#[cfg(test)]
mod tests {
    use vaultkey::traits::{AsymmetricKey, RemoteError};
    use vaultkey::HashAlgorithm::{self, *};
    use vaultkey::SignaturePadding::{self, Pkcs1v15, Pss};
    use vaultkey::VaultKeyError;
    use vaultkey_crypto::digest;

    use crate::mock::MockVaultClient;
    use crate::{adapter_with, init_logging, reference_key, reference_public};

    const COMBINATIONS: [(HashAlgorithm, SignaturePadding); 7] = [
        (Sha1, Pkcs1v15),
        (Sha256, Pkcs1v15),
        (Sha384, Pkcs1v15),
        (Sha512, Pkcs1v15),
        (Sha256, Pss),
        (Sha384, Pss),
        (Sha512, Pss),
    ];

    #[test]
    fn sign_then_verify_round_trips_every_combination() {
        init_logging();
        let (adapter, _client) = adapter_with(MockVaultClient::new(reference_key()));
        let data = b"the package to be signed";

        for (hash, padding) in COMBINATIONS {
            let signature = adapter.sign(data, hash, padding).unwrap();
            assert_eq!(signature.len(), 256, "{:?}/{:?}", hash, padding);
            assert!(
                adapter.verify(data, &signature, hash, padding).unwrap(),
                "{:?}/{:?}",
                hash,
                padding
            );
            assert!(!adapter
                .verify(b"tampered data", &signature, hash, padding)
                .unwrap());
        }
    }

    #[test]
    fn precomputed_digest_matches_the_data_path() {
        let (adapter, _client) = adapter_with(MockVaultClient::new(reference_key()));
        let data = b"digest me";
        let precomputed = digest::compute(Sha256, data);

        // PKCS#1 v1.5 is deterministic, so both entry points agree.
        let from_data = adapter.sign(data, Sha256, Pkcs1v15).unwrap();
        let from_digest = adapter.sign_digest(&precomputed, Sha256, Pkcs1v15).unwrap();
        assert_eq!(from_data, from_digest);
        assert!(adapter
            .verify_digest(&precomputed, &from_data, Sha256, Pkcs1v15)
            .unwrap());
    }

    #[test]
    fn malformed_signature_length_is_an_error_not_a_mismatch() {
        let (adapter, _client) = adapter_with(MockVaultClient::new(reference_key()));
        assert!(matches!(
            adapter.verify(b"data", &[0u8; 100], Sha256, Pkcs1v15),
            Err(VaultKeyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn sha1_signature_verifies_under_a_plain_sha1_verifier() {
        // The remote RSNULL path signs the wrapped DigestInfo; the result
        // must still check out as an ordinary SHA-1 PKCS#1 v1.5 signature.
        let (adapter, _client) = adapter_with(MockVaultClient::new(reference_key()));
        let data = b"legacy sha1 consumer";
        let signature = adapter.sign(data, Sha1, Pkcs1v15).unwrap();
        assert!(reference_public()
            .verify(data, &signature, Sha1, Pkcs1v15)
            .unwrap());
    }

    #[test]
    fn mismatched_digest_length_is_rejected() {
        let (adapter, client) = adapter_with(MockVaultClient::new(reference_key()));
        let short = [0u8; 20];
        assert!(matches!(
            adapter.sign_digest(&short, Sha256, Pkcs1v15),
            Err(VaultKeyError::InvalidArgument(_))
        ));
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn pss_with_sha1_never_reaches_the_remote() {
        let (adapter, client) = adapter_with(MockVaultClient::new(reference_key()));
        assert!(matches!(
            adapter.sign(b"data", Sha1, Pss),
            Err(VaultKeyError::UnsupportedAlgorithm)
        ));
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn remote_failure_surfaces_once_without_retry() {
        let (adapter, client) = adapter_with(
            MockVaultClient::new(reference_key()).with_failure(RemoteError::KeyDisabled(
                "signing key disabled by policy".to_string(),
            )),
        );
        let result = adapter.sign(b"data", Sha256, Pkcs1v15);
        assert!(matches!(
            result,
            Err(VaultKeyError::RemoteOperationFailed(
                RemoteError::KeyDisabled(_)
            ))
        ));
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn remote_cancellation_maps_to_cancelled() {
        let (adapter, client) =
            adapter_with(MockVaultClient::new(reference_key()).with_failure(RemoteError::Cancelled));
        assert!(matches!(
            adapter.sign(b"data", Sha256, Pkcs1v15),
            Err(VaultKeyError::Cancelled)
        ));
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn key_size_and_parameters_match_the_reference_key() {
        use rsa::traits::PublicKeyParts;

        let (adapter, _client) = adapter_with(MockVaultClient::new(reference_key()));
        assert_eq!(adapter.key_size().unwrap(), 2048);

        let params = adapter.public_parameters().unwrap();
        let public = reference_key().to_public_key();
        assert_eq!(params.modulus, public.n().to_bytes_be());
        assert_eq!(params.exponent, public.e().to_bytes_be());

        assert!(matches!(
            adapter.private_parameters(),
            Err(VaultKeyError::NotSupported(_))
        ));
    }

    #[tokio::test]
    async fn context_signs_without_the_blocking_bridge() {
        // Non-blocking callers bypass the adapter and await the context.
        let (adapter, _client) = adapter_with(MockVaultClient::new(reference_key()));
        let data = b"async caller";
        let precomputed = digest::compute(Sha256, data);
        let signature = adapter
            .context()
            .sign_digest(&precomputed, Sha256, Pkcs1v15)
            .await
            .unwrap();
        assert!(adapter.verify(data, &signature, Sha256, Pkcs1v15).unwrap());
    }
}

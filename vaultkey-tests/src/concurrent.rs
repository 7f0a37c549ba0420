// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use vaultkey::traits::AsymmetricKey;
    use vaultkey::{HashAlgorithm, SignaturePadding};

    use crate::mock::MockVaultClient;
    use crate::{adapter_with, init_logging, reference_key};

    #[test]
    fn hundred_concurrent_signs_stay_isolated() {
        init_logging();
        let (adapter, client) =
            adapter_with(MockVaultClient::new(reference_key()).with_delay(1..25));
        let adapter = Arc::new(adapter);

        let handles: Vec<_> = (0..100)
            .map(|i| {
                let adapter = adapter.clone();
                thread::spawn(move || {
                    let data = format!("payload {}", i).into_bytes();
                    let signature = adapter
                        .sign(&data, HashAlgorithm::Sha256, SignaturePadding::Pkcs1v15)
                        .unwrap();
                    (data, signature)
                })
            })
            .collect();

        let mut signatures = HashSet::new();
        for handle in handles {
            let (data, signature) = handle.join().unwrap();
            // Each signature must verify against its own payload: no
            // cross-call mixing.
            assert!(adapter
                .verify(
                    &data,
                    &signature,
                    HashAlgorithm::Sha256,
                    SignaturePadding::Pkcs1v15
                )
                .unwrap());
            signatures.insert(signature);
        }
        assert_eq!(signatures.len(), 100);
        assert_eq!(client.calls(), 100);
    }
}

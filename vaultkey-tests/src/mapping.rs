// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use vaultkey::HashAlgorithm::*;
    use vaultkey::SignaturePadding::{Pkcs1v15, Pss};
    use vaultkey::{EncryptionPadding, VaultKeyError};
    use vaultkey_crypto::translate::{encryption_algorithm, signature_algorithm};

    #[test]
    fn signing_identifiers_are_fixed() {
        assert_eq!(signature_algorithm(Sha1, Pkcs1v15).unwrap(), "RSNULL");
        assert_eq!(signature_algorithm(Sha256, Pkcs1v15).unwrap(), "RS256");
        assert_eq!(signature_algorithm(Sha384, Pkcs1v15).unwrap(), "RS384");
        assert_eq!(signature_algorithm(Sha512, Pkcs1v15).unwrap(), "RS512");
        assert_eq!(signature_algorithm(Sha256, Pss).unwrap(), "PS256");
        assert_eq!(signature_algorithm(Sha384, Pss).unwrap(), "PS384");
        assert_eq!(signature_algorithm(Sha512, Pss).unwrap(), "PS512");
    }

    #[test]
    fn signing_identifiers_are_distinct() {
        let mut ids = HashSet::new();
        for hash in [Sha1, Sha256, Sha384, Sha512] {
            ids.insert(signature_algorithm(hash, Pkcs1v15).unwrap());
        }
        for hash in [Sha256, Sha384, Sha512] {
            ids.insert(signature_algorithm(hash, Pss).unwrap());
        }
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn pss_with_sha1_is_rejected() {
        assert!(matches!(
            signature_algorithm(Sha1, Pss),
            Err(VaultKeyError::UnsupportedAlgorithm)
        ));
    }

    #[test]
    fn encryption_identifiers_are_fixed_and_distinct() {
        assert_eq!(encryption_algorithm(EncryptionPadding::Pkcs1v15), "RSA1_5");
        assert_eq!(encryption_algorithm(EncryptionPadding::OaepSha1), "RSA-OAEP");
        assert_eq!(
            encryption_algorithm(EncryptionPadding::OaepSha256),
            "RSA-OAEP-256"
        );

        let ids: HashSet<_> = [
            EncryptionPadding::Pkcs1v15,
            EncryptionPadding::OaepSha1,
            EncryptionPadding::OaepSha256,
        ]
        .into_iter()
        .map(encryption_algorithm)
        .collect();
        assert_eq!(ids.len(), 3);
    }
}

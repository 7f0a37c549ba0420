// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

use vaultkey::{EncryptionPadding, HashAlgorithm, SignaturePadding, VaultKeyError};

/// Remote signing-algorithm identifier for a hash/padding pair.
///
/// The identifiers are a fixed service vocabulary; anything outside the
/// tables below is rejected, never guessed. SHA-1 signing goes through the
/// raw `RSNULL` path, which is why its digest needs the DigestInfo wrap
/// applied in [`crate::digest::wrap_sha1`].
pub fn signature_algorithm(
    hash: HashAlgorithm,
    padding: SignaturePadding,
) -> Result<&'static str, VaultKeyError> {
    match (padding, hash) {
        (SignaturePadding::Pkcs1v15, HashAlgorithm::Sha1) => Ok("RSNULL"),
        (SignaturePadding::Pkcs1v15, HashAlgorithm::Sha256) => Ok("RS256"),
        (SignaturePadding::Pkcs1v15, HashAlgorithm::Sha384) => Ok("RS384"),
        (SignaturePadding::Pkcs1v15, HashAlgorithm::Sha512) => Ok("RS512"),
        (SignaturePadding::Pss, HashAlgorithm::Sha256) => Ok("PS256"),
        (SignaturePadding::Pss, HashAlgorithm::Sha384) => Ok("PS384"),
        (SignaturePadding::Pss, HashAlgorithm::Sha512) => Ok("PS512"),
        (SignaturePadding::Pss, HashAlgorithm::Sha1) => Err(VaultKeyError::UnsupportedAlgorithm),
    }
}

/// Remote encryption-algorithm identifier for a padding scheme. Total over
/// the closed enum.
pub fn encryption_algorithm(padding: EncryptionPadding) -> &'static str {
    match padding {
        EncryptionPadding::Pkcs1v15 => "RSA1_5",
        EncryptionPadding::OaepSha1 => "RSA-OAEP",
        EncryptionPadding::OaepSha256 => "RSA-OAEP-256",
    }
}

// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use vaultkey::{HashAlgorithm, VaultKeyError, SHA1_DIGEST_SIZE};

/// DigestInfo prefix for SHA-1: SEQUENCE { SEQUENCE { OID 1.3.14.3.2.26,
/// NULL }, OCTET STRING (20 bytes) }. The remote SHA-1 signing algorithm
/// performs a raw PKCS#1 v1.5 private-key operation, so the caller must
/// supply the complete structure. Byte-exact service contract.
pub const SHA1_DIGEST_INFO_PREFIX: [u8; 15] = [
    0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x04, 0x14,
];

pub const SHA1_DIGEST_INFO_SIZE: usize = SHA1_DIGEST_INFO_PREFIX.len() + SHA1_DIGEST_SIZE;

pub fn compute(hash: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    match hash {
        HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

/// Wrap a raw 20-byte SHA-1 digest into the structure the remote SHA-1
/// signing path expects. Only applied when the negotiated hash is SHA-1;
/// other digests go to the remote service unchanged.
pub fn wrap_sha1(digest: &[u8]) -> Result<Vec<u8>, VaultKeyError> {
    if digest.len() != SHA1_DIGEST_SIZE {
        return Err(VaultKeyError::InvalidArgument(format!(
            "SHA-1 digest is {} bytes, expected {}",
            digest.len(),
            SHA1_DIGEST_SIZE
        )));
    }
    let mut wrapped = Vec::with_capacity(SHA1_DIGEST_INFO_SIZE);
    wrapped.extend_from_slice(&SHA1_DIGEST_INFO_PREFIX);
    wrapped.extend_from_slice(digest);
    Ok(wrapped)
}

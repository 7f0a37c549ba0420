// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Oaep, Pkcs1v15Encrypt, Pkcs1v15Sign, Pss, RsaPublicKey};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use vaultkey::{EncryptionPadding, HashAlgorithm, SignaturePadding, VaultKeyError};
use x509_cert::der::{Decode, Encode};
use x509_cert::Certificate;

use crate::digest;

/// Local RSA public-key material: the modulus/exponent pair a remote key
/// publishes. Verification, encryption and parameter export run against
/// this value without touching the network.
#[derive(Clone, Debug, PartialEq)]
pub struct VaultPublicKey {
    key: RsaPublicKey,
}

impl VaultPublicKey {
    /// Rebuild the key from raw big-endian modulus and exponent bytes.
    pub fn from_components(modulus: &[u8], exponent: &[u8]) -> Result<Self, VaultKeyError> {
        if modulus.is_empty() {
            return Err(VaultKeyError::InvalidArgument(
                "modulus is empty".to_string(),
            ));
        }
        if exponent.is_empty() {
            return Err(VaultKeyError::InvalidArgument(
                "public exponent is empty".to_string(),
            ));
        }
        let n = BigUint::from_bytes_be(modulus);
        let e = BigUint::from_bytes_be(exponent);
        let key = RsaPublicKey::new(n, e).map_err(|e| {
            VaultKeyError::InvalidPublicKey(format!("rebuilding RSA public key: {}", e))
        })?;
        Ok(Self { key })
    }

    pub fn from_spki(spki: &[u8]) -> Result<Self, VaultKeyError> {
        if spki.is_empty() {
            return Err(VaultKeyError::InvalidArgument(
                "public key is empty".to_string(),
            ));
        }
        let key = RsaPublicKey::from_public_key_der(spki).map_err(|e| {
            VaultKeyError::InvalidPublicKey(format!("decoding RSA public key from SPKI: {}", e))
        })?;
        Ok(Self { key })
    }

    /// Extract the RSA public key from an X.509 certificate (DER).
    pub fn from_certificate_der(certificate: &[u8]) -> Result<Self, VaultKeyError> {
        if certificate.is_empty() {
            return Err(VaultKeyError::InvalidArgument(
                "certificate is empty".to_string(),
            ));
        }
        let parsed = Certificate::from_der(certificate).map_err(|e| {
            VaultKeyError::InvalidPublicKey(format!("decoding certificate: {}", e))
        })?;
        let spki = &parsed.tbs_certificate.subject_public_key_info;
        if spki.algorithm.oid != rsa::pkcs1::ALGORITHM_OID {
            return Err(VaultKeyError::InvalidPublicKey(format!(
                "certificate key algorithm {} is not RSA",
                spki.algorithm.oid
            )));
        }
        let spki_der = spki
            .to_der()
            .map_err(|e| VaultKeyError::Encoding(format!("re-encoding SPKI: {}", e)))?;
        Self::from_spki(&spki_der)
    }

    pub fn modulus(&self) -> Vec<u8> {
        self.key.n().to_bytes_be()
    }

    pub fn exponent(&self) -> Vec<u8> {
        self.key.e().to_bytes_be()
    }

    pub fn key_size_bits(&self) -> usize {
        self.key.n().bits()
    }

    pub fn key_size_bytes(&self) -> usize {
        self.key.size()
    }

    pub fn to_spki_der(&self) -> Result<Vec<u8>, VaultKeyError> {
        Ok(self
            .key
            .to_public_key_der()
            .map_err(|e| VaultKeyError::Encoding(format!("encoding SPKI: {}", e)))?
            .to_vec())
    }

    pub fn verify(
        &self,
        data: &[u8],
        signature: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<bool, VaultKeyError> {
        self.verify_digest(&digest::compute(hash, data), signature, hash, padding)
    }

    /// Verify a signature over a precomputed digest. `Ok(false)` means the
    /// signature does not match; errors are reserved for malformed input.
    pub fn verify_digest(
        &self,
        digest: &[u8],
        signature: &[u8],
        hash: HashAlgorithm,
        padding: SignaturePadding,
    ) -> Result<bool, VaultKeyError> {
        if digest.len() != hash.digest_len() {
            return Err(VaultKeyError::InvalidArgument(format!(
                "digest is {} bytes, expected {} for {:?}",
                digest.len(),
                hash.digest_len(),
                hash
            )));
        }
        if signature.len() != self.key_size_bytes() {
            return Err(VaultKeyError::InvalidArgument(format!(
                "signature is {} bytes, expected {}",
                signature.len(),
                self.key_size_bytes()
            )));
        }
        let outcome = match (padding, hash) {
            (SignaturePadding::Pkcs1v15, HashAlgorithm::Sha1) => {
                self.key
                    .verify(Pkcs1v15Sign::new::<Sha1>(), digest, signature)
            }
            (SignaturePadding::Pkcs1v15, HashAlgorithm::Sha256) => {
                self.key
                    .verify(Pkcs1v15Sign::new::<Sha256>(), digest, signature)
            }
            (SignaturePadding::Pkcs1v15, HashAlgorithm::Sha384) => {
                self.key
                    .verify(Pkcs1v15Sign::new::<Sha384>(), digest, signature)
            }
            (SignaturePadding::Pkcs1v15, HashAlgorithm::Sha512) => {
                self.key
                    .verify(Pkcs1v15Sign::new::<Sha512>(), digest, signature)
            }
            (SignaturePadding::Pss, HashAlgorithm::Sha1) => {
                return Err(VaultKeyError::UnsupportedAlgorithm)
            }
            (SignaturePadding::Pss, HashAlgorithm::Sha256) => {
                self.key.verify(Pss::new::<Sha256>(), digest, signature)
            }
            (SignaturePadding::Pss, HashAlgorithm::Sha384) => {
                self.key.verify(Pss::new::<Sha384>(), digest, signature)
            }
            (SignaturePadding::Pss, HashAlgorithm::Sha512) => {
                self.key.verify(Pss::new::<Sha512>(), digest, signature)
            }
        };
        Ok(outcome.is_ok())
    }

    /// Encrypt to the remote key holder. Local operation.
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        padding: EncryptionPadding,
    ) -> Result<Vec<u8>, VaultKeyError> {
        let mut rng = rand::thread_rng();
        let ciphertext = match padding {
            EncryptionPadding::Pkcs1v15 => self.key.encrypt(&mut rng, Pkcs1v15Encrypt, plaintext),
            EncryptionPadding::OaepSha1 => {
                self.key.encrypt(&mut rng, Oaep::new::<Sha1>(), plaintext)
            }
            EncryptionPadding::OaepSha256 => {
                self.key.encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
            }
        };
        ciphertext.map_err(|e| VaultKeyError::Crypto(format!("RSA encryption: {}", e)))
    }

    pub fn as_rsa(&self) -> &RsaPublicKey {
        &self.key
    }
}

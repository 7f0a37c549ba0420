// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

pub mod identifier;
pub mod traits;

pub use identifier::KeyIdentifier;

use thiserror::Error;

use crate::traits::RemoteError;

#[derive(Debug, Clone, Error)]
pub enum VaultKeyError {
    /// A required construction input is missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The supplied public key or certificate does not carry a usable RSA key.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
    /// The hash algorithm or padding scheme is outside the remote vocabulary.
    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,
    /// The operation was attempted on an uninitialized context or adapter.
    #[error("operation on an uninitialized key context")]
    InvalidOperation,
    /// The remote capability reported a failure. Never retried locally.
    #[error("remote operation failed")]
    RemoteOperationFailed(#[source] RemoteError),
    /// The outstanding remote call was aborted before it completed.
    #[error("operation cancelled")]
    Cancelled,
    #[error("operation not supported: {0}")]
    NotSupported(&'static str),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("crypto provider error: {0}")]
    Crypto(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}

/** Hash algorithm negotiated for signing and verification. */
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => SHA1_DIGEST_SIZE,
            Self::Sha256 => SHA256_DIGEST_SIZE,
            Self::Sha384 => SHA384_DIGEST_SIZE,
            Self::Sha512 => SHA512_DIGEST_SIZE,
        }
    }
}

/** RSA signature padding scheme. */
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SignaturePadding {
    Pkcs1v15,
    Pss,
}

/** RSA encryption padding scheme. */
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EncryptionPadding {
    Pkcs1v15,
    OaepSha1,
    OaepSha256,
}

pub const SHA1_DIGEST_SIZE: usize = 20;
pub const SHA256_DIGEST_SIZE: usize = 32;
pub const SHA384_DIGEST_SIZE: usize = 48;
pub const SHA512_DIGEST_SIZE: usize = 64;

// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

use core::fmt;

use url::Url;

use crate::VaultKeyError;

/// Reference to a private key held by the remote vault: the vault base
/// address, the key name and an optional key version. The referenced key
/// material itself is never available locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyIdentifier {
    vault: Url,
    name: String,
    version: Option<String>,
}

impl KeyIdentifier {
    pub fn new(vault: Url, name: impl Into<String>) -> Result<Self, VaultKeyError> {
        let name = name.into();
        if name.is_empty() {
            return Err(VaultKeyError::InvalidArgument(
                "key name is empty".to_string(),
            ));
        }
        Ok(Self {
            vault,
            name,
            version: None,
        })
    }

    pub fn with_version(
        vault: Url,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, VaultKeyError> {
        let version = version.into();
        if version.is_empty() {
            return Err(VaultKeyError::InvalidArgument(
                "key version is empty".to_string(),
            ));
        }
        let mut identifier = Self::new(vault, name)?;
        identifier.version = Some(version);
        Ok(identifier)
    }

    pub fn vault(&self) -> &Url {
        &self.vault
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Canonical `<vault>/keys/<name>[/<version>]` form sent to the remote
    /// service.
    pub fn identifier(&self) -> String {
        let base = self.vault.as_str().trim_end_matches('/');
        match &self.version {
            Some(version) => format!("{}/keys/{}/{}", base, self.name, version),
            None => format!("{}/keys/{}", base, self.name),
        }
    }
}

impl fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

pub mod digest;
pub mod public;
pub mod translate;

pub use public::VaultPublicKey;

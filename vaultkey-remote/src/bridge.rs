// Copyright (c) 2026, The vaultkey authors. All rights reserved.
// SPDX-License-Identifier: BSD-3-Clause

use std::future::Future;
use std::sync::mpsc;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};
use tracing::trace;
use vaultkey::VaultKeyError;

static BRIDGE: OnceLock<Runtime> = OnceLock::new();

fn runtime() -> Result<&'static Runtime, VaultKeyError> {
    if let Some(runtime) = BRIDGE.get() {
        return Ok(runtime);
    }
    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("vaultkey-bridge")
        .enable_all()
        .build()
        .map_err(|e| VaultKeyError::Runtime(format!("building bridge runtime: {}", e)))?;
    // A concurrent initializer may win the race; its runtime is kept and
    // ours is dropped.
    Ok(BRIDGE.get_or_init(|| runtime))
}

/// Run `future` on the dedicated bridge runtime and block the calling
/// thread until it resolves. The future never runs on the caller's
/// scheduler, so a caller already inside an async runtime blocks one of
/// its own worker threads without deadlocking the pending operation.
pub(crate) fn wait<F>(future: F) -> Result<F::Output, VaultKeyError>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    runtime()?.spawn(async move {
        let _ = tx.send(future.await);
    });
    trace!("blocking on bridge runtime");
    // A dropped sender means the bridge tore down the task; surface that
    // as cancellation rather than hanging.
    rx.recv().map_err(|_| VaultKeyError::Cancelled)
}

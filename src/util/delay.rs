//! Timer helper that only waits in the browser.

#![allow(clippy::unused_async)]

use std::time::Duration;

/// Wait for `delay`. Outside the browser this returns immediately.
#[cfg(feature = "csr")]
pub async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

/// Wait for `delay`. Outside the browser this returns immediately.
#[cfg(not(feature = "csr"))]
pub async fn sleep(_delay: Duration) {}

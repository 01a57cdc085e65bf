//! # Zorx Network Utilities (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! The only network-facing behavior of zorx: deciding whether dependency
//! installation can reach a registry. The check is a single DNS resolution of a
//! well-known host. It never fails; any resolution problem means "offline".
//!
//! ## Architecture
//!
//! - **`ConnectivityProbe`**: the seam the project generator depends on, so tests
//!   can force either answer.
//! - **`DnsProbe`**: resolves [`PROBE_HOST`] with `tokio::net::lookup_host`, bounded
//!   by a timeout. No retry.
//!
use std::time::Duration;
use tracing::debug;

/// Host resolved by the connectivity probe.
pub const PROBE_HOST: &str = "google.com";

/// Upper bound for the DNS lookup.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Answers "is outbound network available".
#[allow(async_fn_in_trait)]
pub trait ConnectivityProbe {
    /// Returns `true` when the probe host resolves. Never fails.
    async fn has_connectivity(&self) -> bool;
}

/// Production probe backed by a DNS lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsProbe;

impl ConnectivityProbe for DnsProbe {
    /// Resolves [`PROBE_HOST`] once, giving up after [`PROBE_TIMEOUT`].
    ///
    /// # Returns
    ///
    /// * `bool` - `true` if at least one address came back. Lookup errors and
    ///   timeouts both mean `false`.
    async fn has_connectivity(&self) -> bool {
        let lookup = tokio::net::lookup_host((PROBE_HOST, 80));
        match tokio::time::timeout(PROBE_TIMEOUT, lookup).await {
            Ok(Ok(mut addrs)) => {
                let reachable = addrs.next().is_some();
                debug!("DNS lookup for {} returned addresses: {}", PROBE_HOST, reachable);
                reachable
            }
            Ok(Err(e)) => {
                debug!("DNS lookup for {} failed: {}", PROBE_HOST, e);
                false
            }
            Err(_) => {
                debug!(
                    "DNS lookup for {} timed out after {:?}",
                    PROBE_HOST, PROBE_TIMEOUT
                );
                false
            }
        }
    }
}

/// Probe with a fixed answer.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

#[cfg(test)]
impl ConnectivityProbe for FixedProbe {
    async fn has_connectivity(&self) -> bool {
        self.0
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_probe_answers() {
        assert!(FixedProbe(true).has_connectivity().await);
        assert!(!FixedProbe(false).has_connectivity().await);
    }

    /// The real probe must return promptly with a boolean whether or not the
    /// test machine is online.
    #[tokio::test]
    async fn test_dns_probe_never_fails() {
        let started = std::time::Instant::now();
        let _answer = DnsProbe.has_connectivity().await;
        assert!(started.elapsed() <= PROBE_TIMEOUT + Duration::from_secs(1));
    }
}

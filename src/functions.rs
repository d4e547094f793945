// Standard library
use std::error::Error;
use std::time::Duration;

// 3rd party crates
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

// Project imports
use crate::providers::cloudflare::types::{CfConfig, Cloudflare};
use crate::providers::DnsProvider;
use crate::settings::types::Settings;
use crate::utility::ip_resolver::types::IpResolver;

/// Main application loop.
///
/// Runs one reconciliation pass immediately, then either returns (one-shot
/// mode) or repeats forever with a cancellable sleep between passes. Pass
/// failures are logged and absorbed so a transient network blip never takes
/// the poller down; only startup errors propagate.
pub async fn run(
    settings: Settings,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), Box<dyn Error>> {
    let cloudflare: Cloudflare = Cloudflare::new(CfConfig::from(&settings))?;
    let resolver: IpResolver = IpResolver::new()?;

    let interval_mins: u64 = settings.update_interval_mins;
    if interval_mins == 0 {
        info!("Updating DNS once...");
        run_pass(&resolver, &cloudflare).await;
        return Ok(());
    }

    info!("🕰️ Updating DNS every {} minutes", interval_mins);

    loop {
        run_pass(&resolver, &cloudflare).await;

        tokio::select! {
            // Handle shutdown signal
            Ok(_) = shutdown_rx.recv() => {
                info!("Received shutdown signal, stopping update loop...");
                break;
            }

            // Wait for the update interval
            _ = tokio::time::sleep(Duration::from_secs(interval_mins * 60)) => {}
        }
    }

    info!("Shutdown complete.");
    Ok(())
}

/// One reconciliation pass: resolve the public address, then converge the
/// provider-side record on it.
async fn run_pass<P: DnsProvider>(resolver: &IpResolver, provider: &P) {
    let ipv4_addr: String = match resolver.resolve().await {
        Ok(addr) => addr,
        Err(e) => {
            // No address means no safe write decision; skip the whole pass.
            warn!("Failed to resolve public IPv4 address: {}", e);
            return;
        }
    };

    info!("Your current IPv4 address is {}.", ipv4_addr);

    match provider.reconcile(&ipv4_addr).await {
        Ok(outcome) => {
            debug!(
                provider = provider.get_name(),
                record_id = ?outcome.record_id(),
                "Reconciliation pass finished: {:?}",
                outcome
            );
        }
        Err(e) => {
            error!(
                provider = provider.get_name(),
                "Reconciliation pass failed: {}",
                e
            );
        }
    }
}

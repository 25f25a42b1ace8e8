//! Media Browser demo binary.
//!
//! Registers the bundled folder browsers, loads them in the background while
//! logging progress, then prints the browser menu and the active browser's
//! content tree as JSON.

use anyhow::Context;
use media_browser::folder::FolderBrowser;
use media_browser::infrastructure::config::Settings;
use media_browser::infrastructure::telemetry::TelemetryBuilder;
use media_browser::{BrowserCoordinator, LoadingState, register_browser};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::new().context("Failed to load configuration")?;

    let metrics = TelemetryBuilder::new(
        settings.telemetry.service_name.clone(),
        env!("CARGO_PKG_VERSION"),
    )
    .with_log_level(settings.telemetry.log_level.clone())
    .with_json(settings.telemetry.json)
    .with_metrics(settings.telemetry.metrics)
    .init()
    .context("Failed to initialize telemetry")?;

    info!("Media Browser Starting...");

    BrowserCoordinator::configure(settings.coordinator())?;
    for descriptor in FolderBrowser::descriptors(&settings.folders) {
        register_browser(descriptor)?;
    }

    // Loading runs in the background; progress is observable meanwhile.
    let coordinator = BrowserCoordinator::shared_without_loading();
    let mut progress = coordinator.subscribe_loading();
    let progress_task = tokio::spawn(async move {
        loop {
            let state = *progress.borrow_and_update();
            info!(?state, "Loading progress");
            if state == LoadingState::Loaded || progress.changed().await.is_err() {
                break;
            }
        }
    });

    coordinator.wait_until_loaded().await;
    let _ = progress_task.await;

    for failure in coordinator.failures() {
        warn!(browser_id = %failure.id, reason = %failure.reason, "Browser unavailable");
    }

    let active = match coordinator.active_browser() {
        Some(browser) => Some(browser),
        None => match coordinator.browsers().into_iter().next() {
            Some(first) => {
                coordinator.select(&first)?;
                Some(first)
            }
            None => None,
        },
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&coordinator.entries())
            .context("Failed to render browser list")?
    );

    match active {
        Some(browser) => {
            info!(browser_id = %browser.id(), "Populating active browser");
            let tree = browser.populate().await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&tree).context("Failed to render content")?
            );
        }
        None => warn!("No media browser available"),
    }

    if let Some(handle) = metrics {
        info!(metrics = %handle.render(), "Metrics snapshot");
    }

    info!("Media Browser Shutdown Complete.");
    Ok(())
}

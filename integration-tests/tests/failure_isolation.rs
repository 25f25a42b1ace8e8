//! Failing and panicking factories do not affect their neighbours.

mod common;

use std::fs::File;
use std::time::Duration;

use anyhow::Result;
use media_browser::content::MediaKind;
use media_browser::folder::FolderBrowser;
use media_browser::{BrowserCoordinator, BrowserError, LoadingState, register_browser};
use tempfile::TempDir;

use common::{FactoryCalls, failing_descriptor, id, names, panicking_descriptor, slow_descriptor};

#[tokio::test]
async fn broken_browsers_are_recorded_and_skipped() -> Result<()> {
    let library = TempDir::new()?;
    File::create(library.path().join("sunset.jpg"))?;
    File::create(library.path().join("track.flac"))?;

    let calls = FactoryCalls::default();
    register_browser(slow_descriptor("iphoto", Duration::from_millis(1), &calls))?;
    register_browser(failing_descriptor("aperture", &calls))?;
    register_browser(panicking_descriptor("lightroom", &calls))?;
    register_browser(FolderBrowser::descriptor(
        MediaKind::Image,
        vec![library.path().to_path_buf()],
    ))?;
    register_browser(FolderBrowser::descriptor(
        MediaKind::Video,
        vec![library.path().join("missing")],
    ))?;

    let coordinator = BrowserCoordinator::shared();
    assert_eq!(coordinator.loading_state(), LoadingState::Loaded);
    assert_eq!(calls.count(), 3);
    assert_eq!(
        names(&coordinator.browser_ids()),
        vec!["iphoto", "folder.photos"]
    );

    let failed: Vec<String> = coordinator
        .failures()
        .iter()
        .map(|f| f.id.to_string())
        .collect();
    assert_eq!(failed, vec!["aperture", "lightroom", "folder.movies"]);
    let panicked = &coordinator.failures()[1];
    assert!(panicked.reason.contains("corrupt library database"));

    // Failed browsers cannot be selected.
    assert!(matches!(
        coordinator.select_by_id(&id("aperture")),
        Err(BrowserError::UnknownProvider(_))
    ));
    assert!(coordinator.active_browser().is_none());

    // Survivors are fully usable.
    let photos = coordinator.select_by_id(&FolderBrowser::id_for(MediaKind::Image))?;
    let tree = photos.populate().await?;
    assert_eq!(tree.item_count(), 1);

    let entries = serde_json::to_value(coordinator.entries())?;
    assert_eq!(entries[1]["id"], "folder.photos");
    assert_eq!(entries[1]["selected"], true);
    assert_eq!(entries[0]["selected"], false);
    Ok(())
}

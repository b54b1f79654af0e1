//! End-to-end override-toggle and sync-to-both-dirs flows against the real
//! filesystem.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use switchyard_core::{
    AppCore, AppId, BrowseError, DirectoryPicker, FixedDirectoryProvider, LiveFile, PerApp, Ports,
    ProviderProfile, NoopSettingsEmitter, ResolvedDirectories, SettingsStore,
};
use switchyard_store::{FsProviderSwitchWriter, JsonFileSettingsStore};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

struct NeverPicker;

#[async_trait::async_trait]
impl DirectoryPicker for NeverPicker {
    async fn pick_directory(&self) -> Result<Option<String>, BrowseError> {
        Ok(None)
    }
}

fn resolved_under(home: &Path) -> ResolvedDirectories {
    ResolvedDirectories {
        host_config: home.join(".switchyard").to_string_lossy().into_owned(),
        apps: PerApp::from_fn(|app| {
            home.join(format!(".{app}")).to_string_lossy().into_owned()
        }),
    }
}

async fn core_in(home: &Path) -> AppCore {
    AppCore::load(Ports {
        store: Arc::new(JsonFileSettingsStore::new(
            home.join(".switchyard").join("settings.json"),
        )),
        provider: Arc::new(FixedDirectoryProvider::new(resolved_under(home))),
        picker: Arc::new(NeverPicker),
        emitter: Arc::new(NoopSettingsEmitter::new()),
        writer: Arc::new(FsProviderSwitchWriter::new()),
    })
    .await
    .unwrap()
}

fn profile() -> ProviderProfile {
    ProviderProfile::new(vec![
        LiveFile::json("auth.json", json!({ "apiKey": "k1" })),
        LiveFile::text("config.toml", "model = \"m1\"\n"),
    ])
}

#[tokio::test]
async fn override_toggle_preserves_configured_paths_and_switches_effective_dir() {
    init_tracing();
    let home = TempDir::new().unwrap();
    let override_dir = home.path().join("wsl").join(".codex");
    let override_dir_str = override_dir.to_string_lossy().into_owned();
    let default_dir_str = home
        .path()
        .join(".codex")
        .to_string_lossy()
        .into_owned();

    let mut core = core_in(home.path()).await;
    core.settings_mut()
        .set_app_override(AppId::Codex, Some(override_dir_str.clone()))
        .await
        .unwrap();
    core.settings_mut()
        .set_overrides_enabled(false)
        .await
        .unwrap();

    assert_eq!(
        core.settings().effective_app_dir(AppId::Codex),
        default_dir_str,
        "override disabled should make the default codex dir effective"
    );

    // The document on disk retains the override while it is disabled.
    let settings_path = home.path().join(".switchyard").join("settings.json");
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&settings_path).unwrap()).unwrap();
    assert_eq!(
        on_disk.get("codexConfigDir").and_then(|v| v.as_str()),
        Some(override_dir_str.as_str()),
        "settings.json should retain codexConfigDir"
    );
    assert_eq!(
        on_disk
            .get("enableConfigDirOverrides")
            .and_then(|v| v.as_bool()),
        Some(false),
        "settings.json should reflect overrides disabled"
    );

    core.settings_mut()
        .set_overrides_enabled(true)
        .await
        .unwrap();
    assert_eq!(
        core.settings().effective_app_dir(AppId::Codex),
        override_dir_str,
        "override enabled should make the override dir effective again"
    );
}

#[tokio::test]
async fn settings_survive_a_restart() {
    init_tracing();
    let home = TempDir::new().unwrap();

    {
        let mut core = core_in(home.path()).await;
        core.settings_mut()
            .set_app_override(AppId::Claude, Some("/custom/claude".into()))
            .await
            .unwrap();
        core.settings_mut()
            .set_sync_to_both_config_dirs(true)
            .await
            .unwrap();
    }

    let reloaded = core_in(home.path()).await;
    assert_eq!(
        reloaded.settings().settings().stored_override(AppId::Claude),
        Some("/custom/claude")
    );
    assert!(reloaded.settings().settings().sync_to_both_config_dirs());
}

#[tokio::test]
async fn sync_enabled_switch_writes_both_directories() {
    init_tracing();
    let home = TempDir::new().unwrap();
    let override_dir = home.path().join("wsl").join(".codex");
    let default_dir = home.path().join(".codex");

    let mut core = core_in(home.path()).await;
    core.settings_mut()
        .set_app_override(
            AppId::Codex,
            Some(override_dir.to_string_lossy().into_owned()),
        )
        .await
        .unwrap();
    core.settings_mut()
        .set_sync_to_both_config_dirs(true)
        .await
        .unwrap();

    let report = core.switch_provider(AppId::Codex, &profile()).await.unwrap();
    assert_eq!(report.succeeded.len(), 2);
    assert!(report.failed.is_empty());

    for dir in [&override_dir, &default_dir] {
        let auth = std::fs::read_to_string(dir.join("auth.json")).unwrap();
        assert!(auth.contains("\"apiKey\": \"k1\""), "auth.json in {dir:?}");
        assert_eq!(
            std::fs::read_to_string(dir.join("config.toml")).unwrap(),
            "model = \"m1\"\n"
        );
    }
}

#[tokio::test]
async fn sync_disabled_switch_leaves_the_other_directory_alone() {
    init_tracing();
    let home = TempDir::new().unwrap();
    let override_dir = home.path().join("wsl").join(".codex");
    let default_dir = home.path().join(".codex");

    let mut core = core_in(home.path()).await;
    core.settings_mut()
        .set_app_override(
            AppId::Codex,
            Some(override_dir.to_string_lossy().into_owned()),
        )
        .await
        .unwrap();

    core.switch_provider(AppId::Codex, &profile()).await.unwrap();

    assert!(override_dir.join("auth.json").exists());
    assert!(
        !default_dir.exists(),
        "default dir must not be created when sync is off"
    );
}

#[tokio::test]
async fn overrides_disabled_sync_still_mirrors_into_configured_override() {
    init_tracing();
    let home = TempDir::new().unwrap();
    let override_dir = home.path().join("wsl").join(".codex");
    let default_dir = home.path().join(".codex");

    let mut core = core_in(home.path()).await;
    core.settings_mut()
        .set_app_override(
            AppId::Codex,
            Some(override_dir.to_string_lossy().into_owned()),
        )
        .await
        .unwrap();
    core.settings_mut()
        .set_overrides_enabled(false)
        .await
        .unwrap();
    core.settings_mut()
        .set_sync_to_both_config_dirs(true)
        .await
        .unwrap();

    let report = core.switch_provider(AppId::Codex, &profile()).await.unwrap();
    assert_eq!(report.succeeded.len(), 2);

    assert!(default_dir.join("auth.json").exists());
    assert!(
        override_dir.join("auth.json").exists(),
        "the configured override dir is mirrored even while overrides are disabled"
    );
}

#[tokio::test]
async fn store_load_matches_what_the_service_committed() {
    init_tracing();
    let home = TempDir::new().unwrap();
    let store = JsonFileSettingsStore::new(home.path().join(".switchyard").join("settings.json"));

    let mut core = core_in(home.path()).await;
    core.settings_mut()
        .set_app_override(AppId::Gemini, Some(String::new()))
        .await
        .unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(
        loaded.stored_override(AppId::Gemini),
        Some(""),
        "the empty-string override round-trips through disk"
    );
}

use std::time::Duration;

use rosterly::prefs::{PrefsStore, ThemeMode, ThemePreference, PREFERENCE_KEY};
use rosterly::storage::{FileStorage, MemoryStorage, StorageAdapter};
use tempfile::TempDir;

fn service_with(storage: MemoryStorage) -> ThemePreference<MemoryStorage> {
    ThemePreference::new(PrefsStore::new(), storage)
}

// -- Hydration ---------------------------------------------------------------

#[tokio::test]
async fn hydrate_applies_valid_stored_value() {
    let storage = MemoryStorage::new();
    storage.insert(PREFERENCE_KEY, "light");
    let prefs = service_with(storage.clone());

    prefs.hydrate().await;

    assert_eq!(prefs.mode(), ThemeMode::Light);
    assert!(prefs.hydrated());
}

#[tokio::test]
async fn hydrate_with_missing_value_keeps_default() {
    let prefs = service_with(MemoryStorage::new());

    prefs.hydrate().await;

    assert_eq!(prefs.mode(), ThemeMode::Dark);
    assert!(prefs.hydrated());
}

#[tokio::test]
async fn hydrate_with_corrupt_value_keeps_default() {
    let storage = MemoryStorage::new();
    storage.insert(PREFERENCE_KEY, "solarized");
    let prefs = service_with(storage);

    prefs.hydrate().await;

    assert_eq!(prefs.mode(), ThemeMode::Dark);
    assert!(prefs.hydrated());
}

#[tokio::test]
async fn hydrate_read_failure_still_marks_hydrated() {
    let storage = MemoryStorage::new();
    storage.fail_reads(true);
    let prefs = service_with(storage);

    prefs.hydrate().await;

    assert_eq!(prefs.mode(), ThemeMode::Dark);
    assert!(prefs.hydrated(), "failure path must still mark hydrated");
}

#[tokio::test]
async fn hydrate_runs_only_once() {
    let storage = MemoryStorage::new();
    let prefs = service_with(storage.clone());

    prefs.hydrate().await;
    assert_eq!(prefs.mode(), ThemeMode::Dark);

    // A value appearing later must not be picked up by a second call.
    storage.insert(PREFERENCE_KEY, "light");
    prefs.hydrate().await;
    assert_eq!(prefs.mode(), ThemeMode::Dark);
}

// -- Write-through -----------------------------------------------------------

#[tokio::test]
async fn set_mode_is_visible_before_the_write_lands() {
    let storage = MemoryStorage::new();
    storage.set_write_delay(Some(Duration::from_millis(50)));
    let prefs = service_with(storage.clone());

    prefs.set_mode(ThemeMode::Light);

    // In-memory state is authoritative immediately.
    assert_eq!(prefs.mode(), ThemeMode::Light);

    prefs.flush().await;
    assert_eq!(storage.value_of(PREFERENCE_KEY).as_deref(), Some("light"));
}

#[tokio::test]
async fn toggle_twice_settles_on_original_mode() {
    let storage = MemoryStorage::new();
    storage.set_write_delay(Some(Duration::from_millis(50)));
    let prefs = service_with(storage.clone());

    // Starting from dark: two rapid toggles race their writes.
    prefs.toggle();
    prefs.toggle();

    assert_eq!(prefs.mode(), ThemeMode::Dark);

    prefs.flush().await;
    assert_eq!(storage.value_of(PREFERENCE_KEY).as_deref(), Some("dark"));
    let writes = storage.writes();
    assert_eq!(
        writes.last().map(|(_, v)| v.as_str()),
        Some("dark"),
        "a superseded write must never land last"
    );
}

#[tokio::test]
async fn set_then_toggle_before_write_completes() {
    let storage = MemoryStorage::new();
    storage.set_write_delay(Some(Duration::from_millis(50)));
    let prefs = service_with(storage.clone());

    prefs.set_mode(ThemeMode::Light);
    prefs.toggle();

    assert_eq!(prefs.mode(), ThemeMode::Dark);

    prefs.flush().await;
    assert_eq!(storage.value_of(PREFERENCE_KEY).as_deref(), Some("dark"));
}

#[tokio::test]
async fn write_failure_never_rolls_back_memory() {
    let storage = MemoryStorage::new();
    storage.fail_writes(true);
    let prefs = service_with(storage.clone());

    prefs.set_mode(ThemeMode::Light);
    prefs.flush().await;

    assert_eq!(prefs.mode(), ThemeMode::Light);
    assert_eq!(storage.value_of(PREFERENCE_KEY), None);
}

#[tokio::test]
async fn subscribers_see_mode_synchronously_with_dispatch() {
    use parking_lot::Mutex;
    use std::sync::Arc;

    let prefs = service_with(MemoryStorage::new());
    let seen: Arc<Mutex<Vec<ThemeMode>>> = Arc::new(Mutex::new(Vec::new()));

    let seen_by_listener = Arc::clone(&seen);
    let _sub = prefs
        .store()
        .subscribe(move |state| seen_by_listener.lock().push(state.mode));

    prefs.set_mode(ThemeMode::Light);
    prefs.toggle();

    assert_eq!(*seen.lock(), vec![ThemeMode::Light, ThemeMode::Dark]);
}

// -- File-backed storage -----------------------------------------------------

#[tokio::test]
async fn file_storage_round_trips_the_preference() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.toml");
    let storage = FileStorage::new(&path);

    storage.set(PREFERENCE_KEY, "light").await.unwrap();
    let value = storage.get(PREFERENCE_KEY).await.unwrap();

    assert_eq!(value.as_deref(), Some("light"));
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("app_theme_preference = \"light\""));
}

#[tokio::test]
async fn file_storage_missing_file_reads_none() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::new(temp_dir.path().join("absent.toml"));

    assert_eq!(storage.get(PREFERENCE_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn file_storage_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("preferences.toml");
    let storage = FileStorage::new(&path);

    storage.set(PREFERENCE_KEY, "dark").await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn file_storage_preserves_unrelated_entries() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.toml");
    std::fs::write(&path, "other_setting = \"kept\"\n").unwrap();
    let storage = FileStorage::new(&path);

    storage.set(PREFERENCE_KEY, "light").await.unwrap();

    assert_eq!(
        storage.get("other_setting").await.unwrap().as_deref(),
        Some("kept")
    );
    assert_eq!(storage.get(PREFERENCE_KEY).await.unwrap().as_deref(), Some("light"));
}

#[tokio::test]
async fn corrupt_file_hydrates_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.toml");
    std::fs::write(&path, "not [ valid { toml").unwrap();

    let prefs = ThemePreference::new(PrefsStore::new(), FileStorage::new(&path));
    prefs.hydrate().await;

    assert_eq!(prefs.mode(), ThemeMode::Dark);
    assert!(prefs.hydrated());
}

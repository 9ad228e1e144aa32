//! Live reload of the config file.
//!
//! `notify` delivers filesystem events on its own thread. Relevant events are
//! forwarded through a bounded channel to a single consumer thread, which
//! reads the file and hands the content to [`ConfigStore::reload`]. Events
//! are handled in delivery order, so the newest content always wins.
//!
//! A bad edit is logged and ignored; the watcher keeps running so the user
//! can fix the file and save again.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

use crate::store::{ConfigStore, ReloadOutcome};

/// Pending events beyond this are dropped; one queued event already
/// guarantees a later read of the file.
const EVENT_QUEUE_CAPACITY: usize = 64;

const THREAD_NAME: &str = "hideui-config-watcher";

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("config path {} does not name a file", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to watch config directory: {0}")]
    Notify(#[from] notify::Error),

    #[error("failed to spawn watcher thread: {0}")]
    Spawn(#[source] std::io::Error),
}

enum WatchMessage {
    Changed(EventKind),
    Stop,
}

/// Subscription to changes of one config file. Unsubscribes on drop.
pub struct ConfigWatcher {
    path: PathBuf,
    watcher: Option<RecommendedWatcher>,
    control_tx: SyncSender<WatchMessage>,
    worker: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for ConfigWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigWatcher")
            .field("path", &self.path)
            .field("running", &self.is_running())
            .finish()
    }
}

impl ConfigWatcher {
    /// Watch `path` and reload `store` whenever it is created, modified or renamed into place.
    pub fn start(store: Arc<ConfigStore>, path: impl Into<PathBuf>) -> Result<Self, WatchError> {
        let path = path.into();
        let Some(file_name) = path.file_name().map(OsString::from) else {
            return Err(WatchError::NotAFile(path));
        };
        // Watch the directory: editors often replace the file via rename.
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (tx, rx) = mpsc::sync_channel(EVENT_QUEUE_CAPACITY);
        let event_tx = tx.clone();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(error = %e, "Config watcher error");
                    return;
                }
            };
            if !is_config_change(&event, &file_name) {
                return;
            }
            match event_tx.try_send(WatchMessage::Changed(event.kind)) {
                Ok(()) | Err(TrySendError::Disconnected(_)) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::trace!("Config event queue full, coalescing");
                }
            }
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let worker_path = path.clone();
        let worker = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run_reload_loop(rx, store, worker_path))
            .map_err(WatchError::Spawn)?;

        tracing::info!(path = %path.display(), "Watching config file");

        Ok(Self {
            path,
            watcher: Some(watcher),
            control_tx: tx,
            worker: Some(worker),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Unsubscribe, let queued events finish, and join the consumer thread.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        // Unsubscribe first so no new events arrive behind the stop marker.
        drop(self.watcher.take());
        let _ = self.control_tx.send(WatchMessage::Stop);

        if worker.join().is_err() {
            tracing::error!("Config watcher thread panicked");
        }
        tracing::info!(path = %self.path.display(), "Stopped watching config file");
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_reload_loop(rx: Receiver<WatchMessage>, store: Arc<ConfigStore>, path: PathBuf) {
    while let Ok(message) = rx.recv() {
        let kind = match message {
            WatchMessage::Changed(kind) => kind,
            WatchMessage::Stop => break,
        };

        // One read covers every change already queued behind this one.
        let mut coalesced = 0usize;
        let mut stop = false;
        while let Ok(next) = rx.try_recv() {
            match next {
                WatchMessage::Changed(_) => coalesced += 1,
                WatchMessage::Stop => {
                    stop = true;
                    break;
                }
            }
        }

        tracing::debug!(?kind, coalesced, "Config file event");
        handle_change(&store, &path);

        if stop {
            break;
        }
    }
}

/// Reload `store` from `path`, logging instead of propagating failures.
pub(crate) fn handle_change(store: &ConfigStore, path: &Path) -> Option<ReloadOutcome> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Config file missing, ignoring event");
        return None;
    }

    match store.reload_file(path) {
        Ok(ReloadOutcome::Applied) => {
            let snapshot = store.snapshot();
            tracing::info!(
                hotkey = %snapshot.hotkey,
                toggle = %snapshot.toggle,
                "Reloaded config"
            );
            Some(ReloadOutcome::Applied)
        }
        Ok(ReloadOutcome::Unchanged) => {
            tracing::debug!("Config content unchanged");
            Some(ReloadOutcome::Unchanged)
        }
        Err(e) => {
            let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
            tracing::error!(path = %path.display(), error = %e, "There was an issue loading your {name}");
            tracing::error!("Please check your config entries for spelling and format!");
            None
        }
    }
}

fn is_config_change(event: &Event, file_name: &OsString) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    );
    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ConfigSnapshot;
    use hideui_types::ToggleState;
    use notify::event::{AccessKind, CreateKind, DataChange, ModifyKind, RemoveKind};
    use std::time::{Duration, Instant};

    const WAIT: Duration = Duration::from_secs(5);

    fn record_text(hotkey: &str, toggle: &str) -> String {
        format!("[\"1 - General\"]\n\"Hide UI Hotkey\" = \"{hotkey}\"\n\"Hide UI\" = \"{toggle}\"\n")
    }

    fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + WAIT;
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(20));
        }
        condition()
    }

    #[test]
    fn filters_by_kind_and_file_name() {
        let name = OsString::from("HideUI.toml");
        let ours = PathBuf::from("/cfg/HideUI.toml");
        let other = PathBuf::from("/cfg/Other.toml");

        let modify = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)));
        assert!(is_config_change(&modify.clone().add_path(ours.clone()), &name));
        assert!(!is_config_change(&modify.add_path(other), &name));

        let create = Event::new(EventKind::Create(CreateKind::File)).add_path(ours.clone());
        assert!(is_config_change(&create, &name));

        let remove = Event::new(EventKind::Remove(RemoveKind::File)).add_path(ours.clone());
        assert!(!is_config_change(&remove, &name));

        let access = Event::new(EventKind::Access(AccessKind::Any)).add_path(ours);
        assert!(!is_config_change(&access, &name));
    }

    #[test]
    fn missing_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::in_memory(ConfigSnapshot::default());

        assert_eq!(handle_change(&store, &dir.path().join("HideUI.toml")), None);
        assert_eq!(store.snapshot(), ConfigSnapshot::default());
    }

    #[test]
    fn bad_edit_is_contained() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("HideUI.toml");
        std::fs::write(&path, record_text("Nope", "On")).unwrap();
        let store = ConfigStore::in_memory(ConfigSnapshot::default());

        assert_eq!(handle_change(&store, &path), None);
        assert_eq!(store.snapshot(), ConfigSnapshot::default());

        std::fs::write(&path, record_text("F5", "On")).unwrap();
        assert_eq!(handle_change(&store, &path), Some(ReloadOutcome::Applied));
        assert_eq!(handle_change(&store, &path), Some(ReloadOutcome::Unchanged));
        assert_eq!(store.toggle(), ToggleState::On);
    }

    #[test]
    fn rejects_path_without_file_name() {
        let store = Arc::new(ConfigStore::in_memory(ConfigSnapshot::default()));
        let err = ConfigWatcher::start(store, "/").unwrap_err();
        assert!(matches!(err, WatchError::NotAFile(_)));
    }

    #[test]
    fn external_edit_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("HideUI.toml");
        let store = Arc::new(ConfigStore::open(&path).unwrap());
        let mut watcher = ConfigWatcher::start(Arc::clone(&store), &path).unwrap();

        std::fs::write(&path, record_text("F7 + LeftShift", "Maybe")).unwrap();
        std::fs::write(&path, record_text("F7 + LeftShift", "On")).unwrap();

        assert!(wait_until(|| store.toggle() == ToggleState::On));
        assert_eq!(store.hotkey(), "F7 + LeftShift".parse().unwrap());
        assert!(watcher.is_running());

        watcher.stop();
        assert!(!watcher.is_running());
    }

    #[test]
    fn replace_via_rename_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("HideUI.toml");
        let store = Arc::new(ConfigStore::open(&path).unwrap());
        let _watcher = ConfigWatcher::start(Arc::clone(&store), &path).unwrap();

        let temp = dir.path().join("HideUI.toml.tmp");
        std::fs::write(&temp, record_text("F2", "On")).unwrap();
        std::fs::rename(&temp, &path).unwrap();

        assert!(wait_until(|| store.hotkey() == "F2".parse().unwrap()));
        assert_eq!(store.toggle(), ToggleState::On);
    }

    #[test]
    fn stopped_watcher_ignores_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("HideUI.toml");
        let store = Arc::new(ConfigStore::open(&path).unwrap());
        let mut watcher = ConfigWatcher::start(Arc::clone(&store), &path).unwrap();
        watcher.stop();
        watcher.stop();

        std::fs::write(&path, record_text("F3", "On")).unwrap();
        thread::sleep(Duration::from_millis(300));

        assert_eq!(store.snapshot(), ConfigSnapshot::default());
    }
}

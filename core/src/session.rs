//! Wiring of store, controller and watcher for one host process.
//!
//! The host calls [`HideUi::start`] once at load, [`HideUi::tick`] every
//! frame, and [`HideUi::shutdown`] when it unloads. Shutdown stops the
//! watcher before the store writes its values back, so our own write is
//! never picked up as an external edit.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::controller::{TickOutcome, ToggleController};
use crate::host::{Keyboard, UiHost};
use crate::store::{ConfigStore, StoreError};
use crate::watcher::ConfigWatcher;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "HIDEUI_CONFIG";

const CONFIG_DIR_NAME: &str = "hideui";
const CONFIG_FILE_NAME: &str = "Azumatt.HideUI.toml";

/// Config file location: `$HIDEUI_CONFIG`, else `<config dir>/hideui/Azumatt.HideUI.toml`.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

#[derive(Debug)]
pub struct HideUi {
    store: Arc<ConfigStore>,
    controller: ToggleController,
    watcher: Option<ConfigWatcher>,
}

impl HideUi {
    /// Load the config at `path` and start watching it.
    ///
    /// Failing to start the watcher is not fatal: the session runs without
    /// live reload.
    pub fn start(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let store = Arc::new(ConfigStore::open(&path)?);

        let watcher = match ConfigWatcher::start(Arc::clone(&store), &path) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Live config reload unavailable");
                None
            }
        };

        Ok(Self::from_parts(store, watcher))
    }

    /// Session over an existing store, without a file watcher.
    pub fn with_store(store: Arc<ConfigStore>) -> Self {
        Self::from_parts(store, None)
    }

    fn from_parts(store: Arc<ConfigStore>, watcher: Option<ConfigWatcher>) -> Self {
        Self {
            controller: ToggleController::new(Arc::clone(&store)),
            store,
            watcher,
        }
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    pub fn controller(&self) -> &ToggleController {
        &self.controller
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.store.path()
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.as_ref().is_some_and(ConfigWatcher::is_running)
    }

    /// Run one frame.
    pub fn tick<K, U>(&self, keyboard: &K, ui: &mut U) -> TickOutcome
    where
        K: Keyboard,
        U: UiHost + ?Sized,
    {
        self.controller.tick(keyboard, ui)
    }

    /// Stop watching, then persist. Safe to call more than once.
    pub fn shutdown(&mut self) -> Result<(), StoreError> {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.stop();
        }
        self.store.shutdown()
    }
}

impl Drop for HideUi {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            tracing::error!(error = %e, "Failed to save config on shutdown");
        }
    }
}

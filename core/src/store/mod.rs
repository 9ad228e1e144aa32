//! Live configuration shared between the frame thread and the file watcher.
//!
//! The hotkey and toggle state are committed together as one
//! [`ConfigSnapshot`] behind a lock, so a reader sees either the values
//! before a reload or the values after it, never a mix.
//!
//! Toggle flips stay in memory; the file is only written on [`ConfigStore::shutdown`]
//! and when it is first created, always through [`ConfigFileRecord::render`].

mod error;


pub use error::{ReloadError, StoreError};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hideui_types::{ConfigFileRecord, ToggleState};

use crate::input::HotkeyBinding;

/// The two live values, always read and replaced as a pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub hotkey: HotkeyBinding,
    pub toggle: ToggleState,
}

impl ConfigSnapshot {
    pub fn new(hotkey: HotkeyBinding, toggle: ToggleState) -> Self {
        Self { hotkey, toggle }
    }

    /// Validate a file record. Entries missing from the record keep the
    /// value they have in `base`.
    pub fn from_record(record: &ConfigFileRecord, base: &ConfigSnapshot) -> Result<Self, ReloadError> {
        let hotkey: HotkeyBinding = match &record.general.hotkey {
            Some(text) => text
                .parse()
                .map_err(|source| ReloadError::InvalidHotkey {
                    value: text.clone(),
                    source,
                })?,
            None => base.hotkey.clone(),
        };

        let toggle: ToggleState = match &record.general.hide_ui {
            Some(text) => text
                .parse()
                .map_err(|_| ReloadError::InvalidToggleValue {
                    value: text.clone(),
                })?,
            None => base.toggle,
        };

        Ok(Self { hotkey, toggle })
    }

    pub fn to_record(&self) -> ConfigFileRecord {
        ConfigFileRecord::new(self.hotkey.to_string(), self.toggle)
    }
}

/// Result of a successful reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// New values were committed.
    Applied,
    /// The content matched the values already in memory; nothing changed.
    Unchanged,
}

/// Owner of the live hotkey binding and toggle state.
#[derive(Debug)]
pub struct ConfigStore {
    path: Option<PathBuf>,
    committed: RwLock<ConfigSnapshot>,
    flushed: AtomicBool,
}

impl ConfigStore {
    /// Open the store backed by `path`.
    ///
    /// A missing file is created with defaults. A file that exists but does
    /// not parse is left alone and the store starts from defaults.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        // confy would create a missing file with its own serializer; write
        // our rendering first so confy only ever reads.
        if !path.exists() {
            write_record(&path, &ConfigFileRecord::default())?;
            tracing::info!(path = %path.display(), "Created default config");
        }

        let snapshot = match confy::load_path::<ConfigFileRecord>(&path) {
            Ok(record) => match ConfigSnapshot::from_record(&record, &ConfigSnapshot::default()) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid config entries, using defaults");
                    ConfigSnapshot::default()
                }
            },
            Err(confy::ConfyError::BadTomlData(e)) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                ConfigSnapshot::default()
            }
            Err(source) => return Err(StoreError::Load { path, source }),
        };

        tracing::info!(
            path = %path.display(),
            hotkey = %snapshot.hotkey,
            toggle = %snapshot.toggle,
            "Loaded config"
        );

        Ok(Self {
            path: Some(path),
            committed: RwLock::new(snapshot),
            flushed: AtomicBool::new(false),
        })
    }

    /// A store with no backing file. `shutdown` writes nothing.
    pub fn in_memory(snapshot: ConfigSnapshot) -> Self {
        Self {
            path: None,
            committed: RwLock::new(snapshot),
            flushed: AtomicBool::new(false),
        }
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Last committed pair.
    pub fn snapshot(&self) -> ConfigSnapshot {
        self.read().clone()
    }

    pub fn hotkey(&self) -> HotkeyBinding {
        self.read().hotkey.clone()
    }

    pub fn toggle(&self) -> ToggleState {
        self.read().toggle
    }

    pub fn set_toggle(&self, toggle: ToggleState) {
        self.write().toggle = toggle;
    }

    /// Invert the toggle in one critical section and return the new value.
    pub fn flip_toggle(&self) -> ToggleState {
        let mut committed = self.write();
        committed.toggle = committed.toggle.flipped();
        committed.toggle
    }

    /// Parse `raw` and commit it. On error nothing changes.
    ///
    /// Content that validates to the values already in memory reports
    /// [`ReloadOutcome::Unchanged`], so repeated events for one save are no-ops.
    pub fn reload(&self, raw: &str) -> Result<ReloadOutcome, ReloadError> {
        let record: ConfigFileRecord = toml::from_str(raw)?;

        let mut committed = self.write();
        let snapshot = ConfigSnapshot::from_record(&record, &committed)?;
        if snapshot == *committed {
            return Ok(ReloadOutcome::Unchanged);
        }

        *committed = snapshot;
        Ok(ReloadOutcome::Applied)
    }

    /// Read `path` and [`reload`](Self::reload) its content.
    pub fn reload_file(&self, path: &Path) -> Result<ReloadOutcome, ReloadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ReloadError::IoFailure {
            path: path.to_path_buf(),
            source,
        })?;
        self.reload(&raw)
    }

    /// Write the committed values to the backing file. Only the first call writes.
    pub fn shutdown(&self) -> Result<(), StoreError> {
        if self.flushed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        let Some(path) = &self.path else {
            return Ok(());
        };

        let record = self.read().to_record();
        write_record(path, &record)?;

        tracing::info!(path = %path.display(), "Saved config");
        Ok(())
    }

    pub fn is_shut_down(&self) -> bool {
        self.flushed.load(Ordering::SeqCst)
    }

    // The snapshot is replaced wholesale, so a poisoned lock still holds a
    // consistent pair.
    fn read(&self) -> RwLockReadGuard<'_, ConfigSnapshot> {
        self.committed.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConfigSnapshot> {
        self.committed.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn write_record(path: &Path, record: &ConfigFileRecord) -> Result<(), StoreError> {
    let save_error = |source| StoreError::Save {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(save_error)?;
    }
    std::fs::write(path, record.render()).map_err(save_error)
}

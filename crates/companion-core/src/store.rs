//! Persistence
//!
//! Companion state lives in two small JSON documents, one for the
//! record and one for the daily-action ledger. [`CompanionStore`]
//! abstracts the backing so tests can run against [`MemoryStore`]
//! while the CLI uses [`JsonFileStore`].

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::ledger::DailyActionLedger;
use crate::record::CompanionRecord;

pub const COMPANION_FILE: &str = "companion.json";
pub const LEDGER_FILE: &str = "daily_actions.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] io::Error),
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save for the two persisted documents. `None` means the
/// document has never been written.
pub trait CompanionStore {
    fn load_companion(&self) -> Result<Option<CompanionRecord>, StoreError>;
    fn save_companion(&self, record: &CompanionRecord) -> Result<(), StoreError>;
    fn load_ledger(&self) -> Result<Option<DailyActionLedger>, StoreError>;
    fn save_ledger(&self, ledger: &DailyActionLedger) -> Result<(), StoreError>;
}

/// Stores each document as pretty-printed JSON under a data directory.
///
/// A malformed document is logged and treated as absent rather than
/// failing the whole command, since the caller can always re-adopt.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load_json<T: serde::de::DeserializeOwned>(
        &self,
        file: &str,
    ) -> Result<Option<T>, StoreError> {
        let path = self.dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring malformed document");
                Ok(None)
            }
        }
    }

    fn save_json<T: serde::Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.dir.join(file), raw)?;
        Ok(())
    }
}

impl CompanionStore for JsonFileStore {
    fn load_companion(&self) -> Result<Option<CompanionRecord>, StoreError> {
        self.load_json(COMPANION_FILE)
    }

    fn save_companion(&self, record: &CompanionRecord) -> Result<(), StoreError> {
        self.save_json(COMPANION_FILE, record)
    }

    fn load_ledger(&self) -> Result<Option<DailyActionLedger>, StoreError> {
        self.load_json(LEDGER_FILE)
    }

    fn save_ledger(&self, ledger: &DailyActionLedger) -> Result<(), StoreError> {
        self.save_json(LEDGER_FILE, ledger)
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    companion: RefCell<Option<CompanionRecord>>,
    ledger: RefCell<Option<DailyActionLedger>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompanionStore for MemoryStore {
    fn load_companion(&self) -> Result<Option<CompanionRecord>, StoreError> {
        Ok(self.companion.borrow().clone())
    }

    fn save_companion(&self, record: &CompanionRecord) -> Result<(), StoreError> {
        *self.companion.borrow_mut() = Some(record.clone());
        Ok(())
    }

    fn load_ledger(&self) -> Result<Option<DailyActionLedger>, StoreError> {
        Ok(self.ledger.borrow().clone())
    }

    fn save_ledger(&self, ledger: &DailyActionLedger) -> Result<(), StoreError> {
        *self.ledger.borrow_mut() = Some(ledger.clone());
        Ok(())
    }
}

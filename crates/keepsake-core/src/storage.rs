//! Persistent storage using redb.
//!
//! This module provides ACID-compliant storage for per-card overrides:
//! - Edited titles and messages
//! - Attached pictures (data URI strings)
//!
//! Values live in a single key-value table addressed by composite keys
//! `{cardId}-title`, `{cardId}-message`, `{cardId}-image`. Absent keys
//! mean "use the compiled-in default"; keys are never deleted.

use crate::cards::CardId;
use crate::content::CardOverride;
use crate::error::CardError;
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

// Table definitions
const OVERRIDES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("overrides");

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the overrides table
    pub fn new(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open/create database
        let db = Database::create(path)?;

        // Initialize the table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(OVERRIDES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Raw Key-Value Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Save a value under a key.
    ///
    /// If the key already exists, it will be overwritten.
    pub fn set(&self, key: &str, value: &str) -> Result<(), CardError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(OVERRIDES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the value stored under a key.
    ///
    /// Returns `None` if the key has never been written.
    pub fn get(&self, key: &str) -> Result<Option<String>, CardError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(OVERRIDES_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Per-Card Override Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Save an edited title for a card.
    pub fn save_title(&self, id: CardId, title: &str) -> Result<(), CardError> {
        self.set(&format!("{}-title", id.slug()), title)
    }

    /// Load the edited title for a card, if any.
    pub fn load_title(&self, id: CardId) -> Result<Option<String>, CardError> {
        self.get(&format!("{}-title", id.slug()))
    }

    /// Save an edited message for a card.
    pub fn save_message(&self, id: CardId, message: &str) -> Result<(), CardError> {
        self.set(&format!("{}-message", id.slug()), message)
    }

    /// Load the edited message for a card, if any.
    pub fn load_message(&self, id: CardId) -> Result<Option<String>, CardError> {
        self.get(&format!("{}-message", id.slug()))
    }

    /// Save an attached picture (data URI) for a card.
    pub fn save_image(&self, id: CardId, data_uri: &str) -> Result<(), CardError> {
        self.set(&format!("{}-image", id.slug()), data_uri)
    }

    /// Load the attached picture for a card, if any.
    pub fn load_image(&self, id: CardId) -> Result<Option<String>, CardError> {
        self.get(&format!("{}-image", id.slug()))
    }

    /// Load everything saved for a card in one shot.
    pub fn load_override(&self, id: CardId) -> Result<CardOverride, CardError> {
        Ok(CardOverride {
            title: self.load_title(id)?,
            message: self.load_message(id)?,
            image: self.load_image(id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    fn card(index: u8) -> CardId {
        CardId::new(index).unwrap()
    }

    #[test]
    fn test_storage_can_be_created() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path);
        assert!(storage.is_ok());
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/to/test.redb");
        let storage = Storage::new(&db_path);
        assert!(storage.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_get_missing_key() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.get("card-1-title").unwrap().is_none());
    }

    #[test]
    fn test_set_and_get_roundtrip_exact() {
        let (storage, _temp) = create_test_storage();

        // Values must come back byte-for-byte, including edge whitespace
        let value = "  Dearest — with love\nand a second line  ";
        storage.set("card-1-message", value).unwrap();
        assert_eq!(storage.get("card-1-message").unwrap().unwrap(), value);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let (storage, _temp) = create_test_storage();

        storage.save_title(card(1), "First").unwrap();
        storage.save_title(card(1), "Second").unwrap();
        assert_eq!(storage.load_title(card(1)).unwrap().unwrap(), "Second");
    }

    #[test]
    fn test_cards_are_isolated() {
        let (storage, _temp) = create_test_storage();

        storage.save_title(card(1), "Edited").unwrap();

        assert!(storage.load_title(card(2)).unwrap().is_none());
        assert!(storage.load_title(card(3)).unwrap().is_none());
        assert!(storage.load_title(card(4)).unwrap().is_none());
    }

    #[test]
    fn test_fields_are_isolated() {
        let (storage, _temp) = create_test_storage();

        storage.save_message(card(2), "Only the message").unwrap();

        assert!(storage.load_title(card(2)).unwrap().is_none());
        assert!(storage.load_image(card(2)).unwrap().is_none());
    }

    #[test]
    fn test_load_override_collects_all_fields() {
        let (storage, _temp) = create_test_storage();

        storage.save_title(card(3), "T").unwrap();
        storage.save_image(card(3), "data:image/png;base64,AAAA").unwrap();

        let saved = storage.load_override(card(3)).unwrap();
        assert_eq!(saved.title.as_deref(), Some("T"));
        assert!(saved.message.is_none());
        assert_eq!(saved.image.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_overrides_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");

        {
            let storage = Storage::new(&db_path).unwrap();
            storage.save_title(card(4), "Kept").unwrap();
        }

        {
            let storage = Storage::new(&db_path).unwrap();
            assert_eq!(storage.load_title(card(4)).unwrap().unwrap(), "Kept");
        }
    }
}

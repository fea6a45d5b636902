use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::data::Pet;
use crate::error::Result;

/// The Library manages the offline SQLite catalog.
/// It stores the listings and the local favorites when no hosted backend is configured.
pub struct Library {
    conn: Connection,
    db_path: PathBuf,
}

impl Library {
    /// Open (or create) the catalog at `db_path` and make sure the schema exists.
    ///
    /// The default location is inside the data directory:
    /// - Linux: ~/.local/share/pawadopt/pawadopt.db
    /// - macOS: ~/Library/Application Support/pawadopt/pawadopt.db
    /// - Windows: %APPDATA%\pawadopt\pawadopt.db
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let library = Library {
            conn,
            db_path: db_path.to_path_buf(),
        };
        library.init_schema()?;

        Ok(library)
    }

    /// Initialize the database schema.
    /// Creates all necessary tables and indexes if they don't exist.
    fn init_schema(&self) -> Result<()> {
        // Listings are stored whole as JSON; `seq` breaks ties between rows
        // listed in the same second
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS pets (
                seq             INTEGER PRIMARY KEY AUTOINCREMENT,
                id              TEXT NOT NULL UNIQUE,
                record_json     TEXT NOT NULL,
                listed_at       INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS favorites (
                user_id         TEXT NOT NULL,
                pet_id          TEXT NOT NULL,
                created_at      INTEGER NOT NULL,
                PRIMARY KEY (user_id, pet_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_favorites_pet_id
             ON favorites(pet_id)",
            [],
        )?;

        tracing::debug!(path = %self.db_path.display(), "catalog schema ready");

        Ok(())
    }

    pub fn pet_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pets", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Insert the given listings when the catalog is empty.
    /// Returns the number of rows written.
    pub fn seed_if_empty(&mut self, pets: &[Pet]) -> Result<usize> {
        if self.pet_count()? > 0 {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        for pet in pets {
            tx.execute(
                "INSERT INTO pets (id, record_json, listed_at) VALUES (?1, ?2, ?3)",
                params![pet.id, serde_json::to_string(pet)?, Utc::now().timestamp()],
            )?;
        }
        tx.commit()?;

        tracing::info!(count = pets.len(), "seeded offline catalog");
        Ok(pets.len())
    }

    /// Insert a new listing; fails if the identifier is already taken
    pub fn insert_pet(&self, pet: &Pet) -> Result<()> {
        self.conn.execute(
            "INSERT INTO pets (id, record_json, listed_at) VALUES (?1, ?2, ?3)",
            params![pet.id, serde_json::to_string(pet)?, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    /// All listings, oldest first
    pub fn all_pets(&self) -> Result<Vec<Pet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT record_json FROM pets ORDER BY listed_at ASC, seq ASC")?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut pets = Vec::new();
        for json in rows {
            let json = json?;
            match serde_json::from_str::<Pet>(&json) {
                Ok(pet) => pets.push(pet),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable catalog row"),
            }
        }

        Ok(pets)
    }

    pub fn pet(&self, id: &str) -> Result<Option<Pet>> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT record_json FROM pets WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;

        Ok(match json {
            Some(json) => Some(serde_json::from_str(&json)?),
            None => None,
        })
    }

    pub fn favorites(&self, user_id: &str) -> Result<BTreeSet<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT pet_id FROM favorites WHERE user_id = ?1")?;

        let ids = stmt
            .query_map(params![user_id], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<BTreeSet<_>, _>>()?;

        Ok(ids)
    }

    /// Adding an existing favorite is a no-op
    pub fn add_favorite(&self, user_id: &str, pet_id: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO favorites (user_id, pet_id, created_at) VALUES (?1, ?2, ?3)",
            params![user_id, pet_id, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    pub fn remove_favorite(&self, user_id: &str, pet_id: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM favorites WHERE user_id = ?1 AND pet_id = ?2",
            params![user_id, pet_id],
        )?;
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("db_path", &self.db_path)
            .finish()
    }
}

use crate::color::Hex;
use anyhow::Context;
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Key holding the serialized saved-palette list.
pub const SAVED_PALETTES_KEY: &str = "spectrum_palettes";

/// Snapshot of a palette the user chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    /// Creation time in unix milliseconds.
    pub id: i64,
    pub colors: Vec<Hex>,
    /// RFC 3339 creation timestamp.
    pub timestamp: String,
}

impl SavedPalette {
    pub fn snapshot(colors: Vec<Hex>) -> anyhow::Result<Self> {
        let now = time::OffsetDateTime::now_utc();
        let timestamp = now
            .format(&time::format_description::well_known::Rfc3339)
            .context("format timestamp")?;
        Ok(Self {
            id: (now.unix_timestamp_nanos() / 1_000_000) as i64,
            colors,
            timestamp,
        })
    }
}

/// String key-value store on SQLite.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                r#"
CREATE TABLE IF NOT EXISTS kv (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL,
  updated_at INTEGER NOT NULL
);
"#,
            )
            .context("init schema")?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key=?1")
            .context("prepare kv get")?;
        let mut rows = stmt.query(params![key]).context("query kv")?;
        if let Some(row) = rows.next().context("read kv row")? {
            let value: String = row.get(0)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    pub fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        self.conn
            .execute(
                r#"
INSERT INTO kv(key, value, updated_at)
VALUES(?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET
  value=excluded.value,
  updated_at=excluded.updated_at
"#,
                params![key, value, now],
            )
            .with_context(|| format!("write key {key}"))?;
        Ok(())
    }

    /// Saved palettes, newest first. Empty when nothing was saved yet.
    pub fn load_saved_palettes(&self) -> anyhow::Result<Vec<SavedPalette>> {
        match self.get(SAVED_PALETTES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).context("parse saved palettes"),
            None => Ok(Vec::new()),
        }
    }

    /// Rewrite the whole saved list.
    pub fn store_saved_palettes(&self, saved: &[SavedPalette]) -> anyhow::Result<()> {
        let raw = serde_json::to_string(saved).context("serialize saved palettes")?;
        self.set(SAVED_PALETTES_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(&dir.path().join("nested").join("db.sqlite3")).unwrap();
        (dir, storage)
    }

    #[test]
    fn kv_overwrites() {
        let (_dir, s) = open_temp();
        assert_eq!(s.get("k").unwrap(), None);
        s.set("k", "one").unwrap();
        s.set("k", "two").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn saved_palettes_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite3");
        let saved = vec![SavedPalette {
            id: 1_700_000_000_000,
            colors: vec![Hex::new(255, 0, 0), Hex::new(0, 0, 255)],
            timestamp: "2023-11-14T22:13:20Z".into(),
        }];
        Storage::open(&path)
            .unwrap()
            .store_saved_palettes(&saved)
            .unwrap();
        let loaded = Storage::open(&path).unwrap().load_saved_palettes().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn stored_json_matches_the_documented_shape() {
        let (_dir, s) = open_temp();
        let saved = vec![SavedPalette {
            id: 5,
            colors: vec![Hex::new(0xaa, 0xbb, 0xcc)],
            timestamp: "2024-01-01T00:00:00Z".into(),
        }];
        s.store_saved_palettes(&saved).unwrap();
        let raw = s.get(SAVED_PALETTES_KEY).unwrap().unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v[0]["id"], 5);
        assert_eq!(v[0]["colors"][0], "#AABBCC");
        assert_eq!(v[0]["timestamp"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn corrupt_value_is_an_error() {
        let (_dir, s) = open_temp();
        s.set(SAVED_PALETTES_KEY, "{not json").unwrap();
        assert!(s.load_saved_palettes().is_err());
    }

    #[test]
    fn snapshot_has_iso_timestamp() {
        let snap = SavedPalette::snapshot(vec![Hex::new(1, 2, 3)]).unwrap();
        assert!(snap.id > 0);
        assert!(snap.timestamp.contains('T'));
        assert!(time::OffsetDateTime::parse(
            &snap.timestamp,
            &time::format_description::well_known::Rfc3339
        )
        .is_ok());
    }
}

use super::{Entity, FarmRepository, Repository, StoreError};
use common::model::farm::Farm;
use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS farmer (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        name     TEXT,
        location TEXT
    );

    CREATE TABLE IF NOT EXISTS farm (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        farmer_id       INTEGER,
        name            TEXT,
        crop_type       TEXT,
        area            INTEGER,
        latitude        REAL,
        longitude       REAL,
        soil_type       TEXT,
        irrigation_type TEXT,
        last_planted    TEXT,
        expected_yield  REAL
    );

    CREATE INDEX IF NOT EXISTS farm_farmer_id ON farm (farmer_id);
";

/// How long a connection waits on another connection's write lock before
/// giving up with `SQLITE_BUSY`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

static MEMORY_DB_SEQ: AtomicU64 = AtomicU64::new(0);

/// SQLite-backed store for every entity kind.
///
/// Every operation opens its own connection to `target`, so requests on
/// different workers never wait on each other inside the process; SQLite's own
/// file locking orders concurrent writers. The schema is created by the first
/// connection that succeeds, which makes opening the store infallible: an
/// unreachable database only shows up as an error on the calls that need it.
#[derive(Clone)]
pub struct SqliteStore {
    target: PathBuf,
    schema_ready: Arc<AtomicBool>,
    /// Holds a shared-cache in-memory database open between calls. Never
    /// locked; the mutex only makes the connection shareable across threads.
    _memory_anchor: Option<Arc<Mutex<Connection>>>,
}

impl SqliteStore {
    /// A store on the database file at `path`, created on first use.
    pub fn open(path: impl AsRef<Path>) -> Self {
        SqliteStore {
            target: path.as_ref().to_path_buf(),
            schema_ready: Arc::new(AtomicBool::new(false)),
            _memory_anchor: None,
        }
    }

    /// A private, empty database that lives as long as the store (or any of
    /// its clones).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let uri = format!(
            "file:agri-memory-{}-{}?mode=memory&cache=shared",
            std::process::id(),
            MEMORY_DB_SEQ.fetch_add(1, Ordering::Relaxed)
        );
        let mut store = Self::open(&uri);
        let anchor = store.connect()?;
        store._memory_anchor = Some(Arc::new(Mutex::new(anchor)));
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.target)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        if !self.schema_ready.load(Ordering::Acquire) {
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
                row.get::<_, String>(0)
            })?;
            conn.execute_batch(SCHEMA)?;
            self.schema_ready.store(true, Ordering::Release);
        }
        Ok(conn)
    }

    fn select_columns<E: Entity>() -> String {
        let mut columns = vec!["id"];
        columns.extend_from_slice(E::COLUMNS);
        columns.join(", ")
    }

    fn find_where<E: Entity>(
        &self,
        condition: &str,
        params: &[&dyn ToSql],
    ) -> Result<Vec<E>, StoreError> {
        let conn = self.connect()?;
        let sql = format!(
            "SELECT {} FROM {} {} ORDER BY id",
            Self::select_columns::<E>(),
            E::TABLE,
            condition
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params, |row| E::from_row(row))?;
        rows.collect::<Result<Vec<E>, _>>().map_err(Into::into)
    }
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

impl<E: Entity> Repository<E> for SqliteStore {
    fn find_all(&self) -> Result<Vec<E>, StoreError> {
        self.find_where("", params![])
    }

    fn find_by_id(&self, id: i64) -> Result<Option<E>, StoreError> {
        let conn = self.connect()?;
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            Self::select_columns::<E>(),
            E::TABLE
        );
        conn.query_row(&sql, params![id], |row| E::from_row(row))
            .optional()
            .map_err(Into::into)
    }

    fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.connect()?;
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)", E::TABLE);
        let exists: bool = conn.query_row(&sql, params![id], |row| row.get(0))?;
        Ok(exists)
    }

    fn save(&self, mut entity: E) -> Result<E, StoreError> {
        let conn = self.connect()?;
        match entity.id() {
            None => {
                let sql = format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    E::TABLE,
                    E::COLUMNS.join(", "),
                    placeholders(E::COLUMNS.len())
                );
                conn.execute(&sql, params_from_iter(entity.values()))?;
                let id = conn.last_insert_rowid();
                entity.set_id(Some(id));
            }
            Some(id) => {
                let sql = format!(
                    "INSERT OR REPLACE INTO {} (id, {}) VALUES ({})",
                    E::TABLE,
                    E::COLUMNS.join(", "),
                    placeholders(E::COLUMNS.len() + 1)
                );
                let mut values = vec![&id as &dyn ToSql];
                values.extend(entity.values());
                conn.execute(&sql, params_from_iter(values))?;
            }
        }
        Ok(entity)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.connect()?;
        let sql = format!("DELETE FROM {} WHERE id = ?1", E::TABLE);
        conn.execute(&sql, params![id])?;
        Ok(())
    }

    fn count(&self) -> Result<u64, StoreError> {
        let conn = self.connect()?;
        let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

impl FarmRepository for SqliteStore {
    fn find_by_farmer_id(&self, farmer_id: i64) -> Result<Vec<Farm>, StoreError> {
        self.find_where("WHERE farmer_id = ?1", params![farmer_id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::model::farmer::Farmer;
    use std::sync::mpsc;
    use std::thread;

    fn farm(farmer_id: i64, name: &str) -> Farm {
        Farm {
            farmer_id: Some(farmer_id),
            name: Some(name.to_string()),
            ..Farm::default()
        }
    }

    #[test]
    fn save_without_id_assigns_increasing_ids() {
        let store = SqliteStore::open_in_memory().unwrap();
        let a = store.save(Farmer::new("A", "X")).unwrap();
        let b = store.save(Farmer::new("B", "Y")).unwrap();

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(Repository::<Farmer>::count(&store).unwrap(), 2);
    }

    #[test]
    fn save_with_id_overwrites_that_record() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut saved = store.save(Farmer::new("A", "X")).unwrap();
        saved.location = None;
        store.save(saved.clone()).unwrap();

        let found: Option<Farmer> = store.find_by_id(1).unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(Repository::<Farmer>::count(&store).unwrap(), 1);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let store = SqliteStore::open_in_memory().unwrap();
        let first = store.save(farm(1, "F1")).unwrap();
        Repository::<Farm>::delete_by_id(&store, first.id.unwrap()).unwrap();
        let second = store.save(farm(1, "F2")).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn farm_round_trips_every_column() {
        let store = SqliteStore::open_in_memory().unwrap();
        let saved = store
            .save(Farm {
                id: None,
                farmer_id: Some(3),
                name: Some("North field".to_string()),
                crop_type: Some("Wheat".to_string()),
                area: Some(12),
                latitude: Some(12.52),
                longitude: Some(76.89),
                soil_type: Some("Loam".to_string()),
                irrigation_type: Some("Drip".to_string()),
                last_planted: NaiveDate::from_ymd_opt(2024, 11, 2),
                expected_yield: Some(4.25),
            })
            .unwrap();

        let found: Option<Farm> = store.find_by_id(saved.id.unwrap()).unwrap();
        assert_eq!(found, Some(saved));
    }

    #[test]
    fn exists_and_delete() {
        let store = SqliteStore::open_in_memory().unwrap();
        let saved = store.save(farm(1, "F1")).unwrap();
        let id = saved.id.unwrap();

        assert!(Repository::<Farm>::exists_by_id(&store, id).unwrap());
        assert!(!Repository::<Farm>::exists_by_id(&store, id + 1).unwrap());

        Repository::<Farm>::delete_by_id(&store, id).unwrap();
        assert!(!Repository::<Farm>::exists_by_id(&store, id).unwrap());
    }

    #[test]
    fn find_by_farmer_id_filters_on_equality() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.save(farm(1, "F1")).unwrap();
        store.save(farm(2, "F2")).unwrap();
        store.save(farm(1, "F3")).unwrap();

        let names: Vec<_> = store
            .find_by_farmer_id(1)
            .unwrap()
            .into_iter()
            .filter_map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["F1", "F3"]);
        assert!(store.find_by_farmer_id(9).unwrap().is_empty());
    }

    #[test]
    fn open_creates_schema_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.sqlite");

        let store = SqliteStore::open(&path);
        store.save(Farmer::new("A", "X")).unwrap();
        drop(store);

        let reopened = SqliteStore::open(&path);
        assert_eq!(Repository::<Farmer>::count(&reopened).unwrap(), 1);
    }

    #[test]
    fn in_memory_stores_are_isolated_and_shared_by_clones() {
        let a = SqliteStore::open_in_memory().unwrap();
        let b = SqliteStore::open_in_memory().unwrap();
        a.save(Farmer::new("A", "X")).unwrap();

        let a_clone = a.clone();
        assert_eq!(Repository::<Farmer>::count(&a_clone).unwrap(), 1);
        assert_eq!(Repository::<Farmer>::count(&b).unwrap(), 0);
    }

    #[test]
    fn an_open_connection_does_not_block_other_operations() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("store.sqlite"));
        store.save(Farmer::new("A", "X")).unwrap();

        // Another operation sits inside a read transaction on its own connection.
        let held = store.connect().unwrap();
        held.execute_batch("BEGIN").unwrap();
        let seen: i64 = held
            .query_row("SELECT COUNT(*) FROM farmer", [], |row| row.get(0))
            .unwrap();
        assert_eq!(seen, 1);

        let worker = store.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = worker
                .save(Farmer::new("B", "Y"))
                .and_then(|_| Repository::<Farmer>::find_all(&worker));
            let _ = tx.send(result.map(|farmers| farmers.len()));
        });

        let finished = rx.recv_timeout(Duration::from_millis(500)).unwrap();
        assert_eq!(finished.unwrap(), 2);
        held.execute_batch("COMMIT").unwrap();
    }

    #[test]
    fn unreachable_database_fails_per_call_and_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-yet");
        let store = SqliteStore::open(missing.join("store.sqlite"));

        assert!(matches!(
            Repository::<Farmer>::count(&store),
            Err(StoreError::Sqlite(_))
        ));

        std::fs::create_dir(&missing).unwrap();
        assert_eq!(Repository::<Farmer>::count(&store).unwrap(), 0);
        store.save(Farmer::new("A", "X")).unwrap();
        assert_eq!(Repository::<Farmer>::count(&store).unwrap(), 1);
    }
}

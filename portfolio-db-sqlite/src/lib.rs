//! SQLite backed comment store.
//!
//! A [`Store`] hands out [`StoreReader`]s and [`StoreWriter`]s. Readers
//! may run concurrently, while a writer excludes everyone else. SQLite
//! only supports a single writer anyway and would otherwise answer
//! concurrent writes with `SQLITE_BUSY`/`SQLITE_LOCKED`.

#[macro_use]
extern crate diesel;

use anyhow::{anyhow, Result as Fallible};
use diesel::{connection::SimpleConnection as _, r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use portfolio_core::repositories as repo;
use std::{cell::RefCell, sync::Arc};

mod models;
mod repo_impl;
mod schema;


const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

// Only applied once when a pool is opened
const SETUP_PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;   -- readers do not block the single writer
PRAGMA synchronous = NORMAL; -- sufficient for journal_mode = WAL
PRAGMA encoding = 'UTF-8';
"#;

const IN_MEMORY_URL: &str = ":memory:";

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// Shared handle of the comment store.
#[derive(Clone)]
pub struct Store {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Store {
    /// Opens the database at `url` without touching its schema.
    pub fn open(url: &str, pool_size: u32) -> Fallible<Self> {
        // Fail early: r2d2 would otherwise keep retrying
        // inaccessible files in the background.
        {
            use diesel::Connection as _;
            SqliteConnection::establish(url)?;
        }
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .build(ConnectionManager::new(url))?;
        pool.get()?.batch_execute(SETUP_PRAGMAS)?;
        log::debug!("Opened comment store {url} with {pool_size} connection(s)");
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    /// A private, migrated database that lives as long as the store.
    ///
    /// Every SQLite connection to `:memory:` opens a distinct database,
    /// so the pool is restricted to a single connection.
    pub fn open_in_memory() -> Fallible<Self> {
        let store = Self::open(IN_MEMORY_URL, 1)?;
        store.migrate()?;
        Ok(store)
    }

    pub fn migrate(&self) -> Fallible<()> {
        log::info!("Running embedded database migrations");
        let writer = self.write()?;
        let mut pooled = writer.conn.borrow_mut();
        let conn: &mut SqliteConnection = &mut pooled;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?;
        log::debug!("Applied {} pending migration(s)", applied.len());
        Ok(())
    }

    pub fn read(&self) -> Fallible<StoreReader> {
        let lock = self.pool.read();
        let conn = checkout(&lock, "reading")?;
        Ok(StoreReader { _lock: lock, conn })
    }

    pub fn write(&self) -> Fallible<StoreWriter> {
        let lock = self.pool.write();
        let conn = checkout(&lock, "writing")?;
        Ok(StoreWriter { _lock: lock, conn })
    }
}

fn checkout(pool: &ConnectionPool, purpose: &str) -> Fallible<RefCell<PooledConnection>> {
    let conn = pool.get().inspect_err(|err| {
        log::error!("No database connection available for {purpose}: {err}");
    })?;
    Ok(RefCell::new(conn))
}

/// Read access that may be shared with other readers.
pub struct StoreReader<'a> {
    _lock: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// Exclusive read/write access.
pub struct StoreWriter<'a> {
    _lock: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// Access within a running transaction, see [`StoreWriter::transaction`].
pub struct StoreTransaction<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> StoreWriter<'a> {
    /// Runs `f` in a single transaction.
    ///
    /// All changes are rolled back if `f` fails and the
    /// error of `f` is returned unchanged.
    pub fn transaction<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&StoreTransaction) -> Result<T, E>,
        E: From<repo::Error>,
    {
        use diesel::Connection as _;
        let mut pooled = self.conn.borrow_mut();
        let conn: &mut SqliteConnection = &mut pooled;
        let mut failure = None;
        conn.transaction::<T, diesel::result::Error, _>(|conn| {
            let tx = StoreTransaction {
                conn: RefCell::new(conn),
            };
            f(&tx).map_err(|err| {
                failure = Some(err);
                diesel::result::Error::RollbackTransaction
            })
        })
        .map_err(|err| match failure {
            Some(failure) => failure,
            None => repo_impl::from_diesel_err(err).into(),
        })
    }
}

#[macro_use]
extern crate diesel;

use diesel::{r2d2, result::QueryResult, sqlite::SqliteConnection};
use parking_lot::RwLock;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    time::Duration,
};
use ukgeo_core::{entities::Dataset, repositories as repo};

mod models;
mod repo_impl;
mod schema;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

#[cfg(test)]
mod tests;

type Connection = SqliteConnection;

type ConnectionManager = r2d2::ConnectionManager<Connection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type Result<T> = std::result::Result<T, repo::Error>;

const DEFAULT_POOL_SIZE: u32 = 4;
const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

const LIST_TABLES: &str = "SELECT name FROM sqlite_master WHERE type='table'";

#[derive(Debug, Clone)]
pub struct PoolOptions {
    pub max_size: u32,
    /// Max. waiting time for a pooled connection
    pub connection_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_POOL_SIZE,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }
}

/// Switches every pooled connection into read-only mode
#[derive(Debug)]
struct QueryOnly;

impl r2d2::CustomizeConnection<Connection, r2d2::Error> for QueryOnly {
    fn on_acquire(&self, conn: &mut Connection) -> std::result::Result<(), r2d2::Error> {
        use diesel::RunQueryDsl as _;
        diesel::sql_query("PRAGMA query_only = ON")
            .execute(conn)
            .map(drop)
            .map_err(r2d2::Error::QueryError)
    }
}

/// SQLite URI that opens the file without write access.
///
/// Characters with a special meaning in URIs are escaped.
fn read_only_uri(path: &Path) -> String {
    let path = path
        .display()
        .to_string()
        .replace('%', "%25")
        .replace('?', "%3f")
        .replace('#', "%23");
    format!("file:{path}?mode=ro")
}

/// Read-only access to the SQLite file of a dataset.
///
/// The connection pool is created on first use and
/// recreated on demand after it has been closed.
pub struct Database {
    dataset: Dataset,
    path: PathBuf,
    options: PoolOptions,
    pool: RwLock<Option<ConnectionPool>>,
}

impl Database {
    pub fn open(dataset: Dataset, path: impl Into<PathBuf>, options: PoolOptions) -> Result<Self> {
        let db = Self {
            dataset,
            path: path.into(),
            options,
            pool: RwLock::new(None),
        };
        db.pool()?;
        Ok(db)
    }

    pub fn is_open(&self) -> bool {
        self.pool.read().is_some()
    }

    /// Release all connections.
    pub fn close(&self) {
        if self.pool.write().take().is_some() {
            log::debug!("Closed {} database '{}'", self.dataset, self.path.display());
        }
    }

    fn not_found(&self) -> repo::Error {
        repo::Error::DatabaseNotFound {
            dataset: self.dataset,
            path: self.path.clone(),
        }
    }

    /// Classify a failure, the file might have vanished in the meantime.
    fn classify(&self, err: anyhow::Error) -> repo::Error {
        if self.path.is_file() {
            return repo::Error::Other(err);
        }
        log::warn!(
            "{} database '{}' has disappeared: {err}",
            self.dataset,
            self.path.display()
        );
        self.not_found()
    }

    /// Classify a failure and drop the pool if the file is gone.
    ///
    /// Must not be called while holding the pool lock.
    fn on_failure(&self, err: anyhow::Error) -> repo::Error {
        let err = self.classify(err);
        if matches!(err, repo::Error::DatabaseNotFound { .. }) {
            self.close();
        }
        err
    }

    fn pool(&self) -> Result<ConnectionPool> {
        if let Some(pool) = self.pool.read().as_ref() {
            return Ok(pool.clone());
        }
        let mut locked_pool = self.pool.write();
        if let Some(pool) = locked_pool.as_ref() {
            // Opened concurrently
            return Ok(pool.clone());
        }
        let pool = self.init_pool()?;
        *locked_pool = Some(pool.clone());
        Ok(pool)
    }

    /// Runs with the pool lock held, failures are only classified.
    fn init_pool(&self) -> Result<ConnectionPool> {
        if !self.path.is_file() {
            return Err(self.not_found());
        }
        let url = read_only_uri(&self.path);
        log::info!(
            "Opening {} database '{}' (read-only, pool size = {})",
            self.dataset,
            self.path.display(),
            self.options.max_size
        );
        // Establish a test connection before creating the connection pool to fail early.
        // Otherwise r2d2 retries until the connection timeout has been reached.
        use diesel::Connection as _;
        let _ = Connection::establish(&url).map_err(|err| self.classify(err.into()))?;
        let manager = ConnectionManager::new(url);
        ConnectionPool::builder()
            .max_size(self.options.max_size)
            .connection_timeout(self.options.connection_timeout)
            .connection_customizer(Box::new(QueryOnly))
            .build(manager)
            .map_err(|err| self.classify(err.into()))
    }

    fn shared(&self) -> Result<PooledConnection> {
        self.pool()?.get().map_err(|err| {
            log::error!("Failed to obtain pooled database connection for read-only access: {err}");
            self.on_failure(err.into())
        })
    }

    fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> QueryResult<T>,
    {
        let mut conn = self.shared()?;
        f(&mut *conn).map_err(|err| self.on_failure(err.into()))
    }

    /// Check that all expected tables exist.
    pub fn validate_tables(&self) -> Result<()> {
        use diesel::RunQueryDsl as _;
        let actual: HashSet<String> = self
            .with_connection(|conn| diesel::sql_query(LIST_TABLES).load::<models::TableName>(conn))?
            .into_iter()
            .map(|t| t.name)
            .collect();
        let mut missing: Vec<_> = self
            .dataset
            .expected_tables()
            .iter()
            .copied()
            .filter(|t| !actual.contains(*t))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort_unstable();
        Err(repo::Error::DatabaseInvalid {
            path: self.path.clone(),
            detail: format!("missing tables: {}", missing.join(", ")),
        })
    }
}

/// The EPC address dataset (postcode + address -> UPRN).
pub struct AddressDb {
    db: Database,
}

/// The OS Open UPRN dataset (UPRN -> coordinates).
pub struct CoordinateDb {
    db: Database,
}

impl AddressDb {
    /// Open and validate the dataset.
    pub fn open(path: impl Into<PathBuf>, options: PoolOptions) -> Result<Self> {
        let db = Database::open(Dataset::EpcAddresses, path, options)?;
        db.validate_tables()?;
        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn close(&self) {
        self.db.close();
    }
}

impl CoordinateDb {
    /// Open and validate the dataset.
    pub fn open(path: impl Into<PathBuf>, options: PoolOptions) -> Result<Self> {
        let db = Database::open(Dataset::OsOpenUprn, path, options)?;
        db.validate_tables()?;
        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn close(&self) {
        self.db.close();
    }
}

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

diesel::define_sql_function! {
    /// Rowid of the most recent successful INSERT on this connection.
    ///
    /// Connection-local, so the confirming re-read after an insert can run as
    /// a separate statement without a wrapping transaction.
    fn last_insert_rowid() -> BigInt;
}

/// Applied to every pooled connection on acquisition.
///
/// WAL keeps readers unblocked while the single writer holds the file, and
/// the busy timeout makes concurrent writers queue instead of failing with
/// SQLITE_BUSY. Foreign keys stay at SQLite's default (off): the schema
/// declares them but the service does not enforce cross-entity consistency.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(ConnectionPragmas))
        .build(manager)
        .expect("Failed to create database connection pool")
}

use crate::database_api;
use crate::error::ErrorContext;
use crate::error::Result;
use log::debug;
use log::info;
use rusqlite::Connection;
use std::path::Path;
use std::path::PathBuf;

/// Location of the SQLite file that holds all items.
///
/// This is the only persistent state of the application: every storage
/// operation opens its own connection from here and closes it before returning.
#[derive(Debug, Clone)]
pub struct DatabaseFile {
    path: PathBuf,
}

impl DatabaseFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> DatabaseFile {
        DatabaseFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connect(&self) -> Result<Connection> {
        debug!("Opening database connection to {}", self.path.display());
        Connection::open(&self.path)
            .context(|| format!("Failed to open database file {}", self.path.display()))
    }
}

/// Create the `items` table if it does not exist yet.
pub fn init_db(database: &DatabaseFile) -> Result<()> {
    info!("Initializing database {}", database.path().display());
    let conn = database.connect()?;
    database_api::create_items_table(&conn)?;
    conn.close()
        .map_err(|(_conn, err)| err)
        .context_str("Failed to close database connection after initialization")
}

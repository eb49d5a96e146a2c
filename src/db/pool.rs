//! SQLite connection wrapper (one connection per CLI invocation).
//!
//! The connection is closed when the pool is dropped, on success and on
//! early return through `?` alike.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::{Connection, Transaction};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    path: String,
}

impl DbPool {
    /// Open the database and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Start a transaction; it rolls back unless committed.
    pub fn transaction(&mut self) -> AppResult<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }
}

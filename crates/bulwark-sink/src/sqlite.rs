// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # SQLite Event Sink
//!
//! Stores events in a `logs` table:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS logs (
//!     id        INTEGER PRIMARY KEY,
//!     type      TEXT NOT NULL,
//!     operation TEXT NOT NULL,
//!     status    TEXT NOT NULL
//! );
//! ```
//!
//! Inserts go through a cached, parameterized statement. The connection is
//! guarded by a mutex, so the sink can be shared between threads.

use crate::{
    error::SinkError,
    event::{BoundaryEvent, LoggedEvent},
    sink::EventSink,
};
use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const CREATE_LOGS_TABLE: &str = "CREATE TABLE IF NOT EXISTS logs (
    id        INTEGER PRIMARY KEY,
    type      TEXT NOT NULL,
    operation TEXT NOT NULL,
    status    TEXT NOT NULL
);";

const INSERT_LOG: &str = "INSERT INTO logs (type, operation, status) VALUES (?1, ?2, ?3)";

const SELECT_LOGS: &str = "SELECT id, type, operation, status FROM logs ORDER BY id";

/// Records events into a SQLite database.
#[derive(Debug)]
pub struct SqliteSink {
    connection: Mutex<Connection>,
}

impl SqliteSink {
    /// Opens (or creates) the database at `path` and ensures the `logs` table exists.
    pub fn open<P>(path: P) -> Result<Self, SinkError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        log::debug!("opening sqlite event sink at {}", path.display());
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self, SinkError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wraps an existing connection, creating the `logs` table if needed.
    pub fn from_connection(connection: Connection) -> Result<Self, SinkError> {
        connection.execute_batch(CREATE_LOGS_TABLE)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    /// Returns every stored event, ordered by id.
    pub fn entries(&self) -> Result<Vec<LoggedEvent>, SinkError> {
        let connection = self.lock()?;
        let mut statement = connection.prepare(SELECT_LOGS)?;
        let rows = statement.query_map([], |row| {
            Ok(LoggedEvent {
                id: row.get(0)?,
                event: BoundaryEvent::new(
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ),
            })
        })?;

        let entries = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Returns the number of stored events.
    pub fn count(&self) -> Result<u64, SinkError> {
        let connection = self.lock()?;
        let count: i64 = connection.query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    #[inline]
    fn lock(&self) -> Result<MutexGuard<'_, Connection>, SinkError> {
        self.connection.lock().map_err(|_| SinkError::Poisoned)
    }
}

impl EventSink for SqliteSink {
    fn record(&self, event: &BoundaryEvent) -> Result<(), SinkError> {
        let connection = self.lock()?;
        let mut statement = connection.prepare_cached(INSERT_LOG)?;
        statement.execute(params![event.type_name(), event.operation(), event.status()])?;
        log::debug!(
            "recorded event {} in sqlite sink: {}",
            connection.last_insert_rowid(),
            event
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "SqliteSink"
    }
}

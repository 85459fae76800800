use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, NewContact};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS contacts (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        message TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL
    );
"#;

const SELECT_COLUMNS: &str = "SELECT id, name, email, phone, message, created_at FROM contacts";

/// Contact repository backed by a SQLite database file.
///
/// SQLite calls are synchronous, so every operation runs on the blocking
/// thread pool via `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct SqliteContactRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteContactRepository {
    /// Open (or create) the database at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> ContactResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ContactError::Storage(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> ContactResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> ContactResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn run<T, F>(&self, op: F) -> ContactResult<T>
    where
        F: FnOnce(&Connection) -> ContactResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| ContactError::Storage("connection lock poisoned".to_string()))?;
            op(&conn)
        })
        .await
        .map_err(|e| ContactError::Storage(format!("Task join error: {}", e)))?
    }
}

fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    let id: String = row.get(0)?;
    let id = ContactId::parse(id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

    Ok(Contact {
        id,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        message: row.get(4)?,
        created_at: row.get(5)?,
    })
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn create(&self, draft: NewContact) -> ContactResult<Contact> {
        let contact = Contact::new(ContactId::generate(), draft, Utc::now());
        let row = contact.clone();

        self.run(move |conn| {
            conn.execute(
                "INSERT INTO contacts (id, name, email, phone, message, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    row.id.as_str(),
                    row.name,
                    row.email,
                    row.phone,
                    row.message,
                    row.created_at
                ],
            )?;
            Ok(())
        })
        .await?;

        Ok(contact)
    }

    async fn list_all(&self) -> ContactResult<Vec<Contact>> {
        self.run(|conn| {
            let mut stmt = conn.prepare(&format!("{} ORDER BY seq ASC", SELECT_COLUMNS))?;
            let contacts = stmt
                .query_map([], row_to_contact)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(contacts)
        })
        .await
    }

    async fn get(&self, id: &ContactId) -> ContactResult<Contact> {
        let id = id.clone();

        self.run(move |conn| {
            conn.query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id.as_str()],
                row_to_contact,
            )
            .optional()?
            .ok_or(ContactError::NotFound)
        })
        .await
    }

    async fn delete(&self, id: &ContactId) -> ContactResult<()> {
        let id = id.clone();

        self.run(move |conn| {
            let removed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id.as_str()])?;
            if removed == 0 {
                return Err(ContactError::NotFound);
            }
            Ok(())
        })
        .await
    }
}

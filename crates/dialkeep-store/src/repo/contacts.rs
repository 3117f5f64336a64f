use crate::error::{Result, StoreError};
use dialkeep_core::domain::{Contact, ContactId};
use rusqlite::{params, Connection};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ContactNew {
    pub display_name: String,
    pub phone: Option<String>,
}

/// One row of the bulk read path used by the batch normalizer: the record id
/// plus its stored phone value, which may be NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRecord {
    pub id: ContactId,
    pub phone: Option<String>,
}

pub struct ContactsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, now_utc: i64, input: ContactNew) -> Result<Contact> {
        let contact = Contact {
            id: ContactId::new(),
            display_name: input.display_name,
            phone: input.phone,
            created_at: now_utc,
            updated_at: now_utc,
        };

        contact.validate()?;

        self.conn.execute(
            "INSERT INTO contacts (id, display_name, phone, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                contact.id.to_string(),
                contact.display_name,
                contact.phone,
                contact.created_at,
                contact.updated_at,
            ],
        )?;

        Ok(contact)
    }

    pub fn get(&self, id: ContactId) -> Result<Option<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, display_name, phone, created_at, updated_at
             FROM contacts WHERE id = ?1;",
        )?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(contact_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    pub fn list(&self, limit: Option<i64>) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, display_name, phone, created_at, updated_at
             FROM contacts ORDER BY display_name COLLATE NOCASE, id LIMIT ?1;",
        )?;
        let mut rows = stmt.query([limit.unwrap_or(-1)])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(contact_from_row(row)?);
        }
        Ok(contacts)
    }

    pub fn delete(&self, id: ContactId) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", [id.to_string()])?;
        if deleted == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Bulk read for the batch normalizer. Returns every contact, including
    /// those with no phone on file, so the caller can account for them.
    pub fn list_phone_records(&self) -> Result<Vec<PhoneRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, phone FROM contacts ORDER BY id;")?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let id_str: String = row.get(0)?;
            let id = ContactId::from_str(&id_str).map_err(|_| StoreError::InvalidId(id_str))?;
            records.push(PhoneRecord {
                id,
                phone: row.get(1)?,
            });
        }
        Ok(records)
    }

    /// Per-record write for the batch normalizer. Each update is its own
    /// atomic statement; a missing row is reported as `NotFound`.
    pub fn update_phone(&self, now_utc: i64, id: ContactId, phone: &str) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE contacts SET phone = ?1, updated_at = ?2 WHERE id = ?3;",
            params![phone, now_utc, id.to_string()],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn contact_from_row(row: &rusqlite::Row<'_>) -> Result<Contact> {
    let id_str: String = row.get(0)?;
    let id = ContactId::from_str(&id_str).map_err(|_| StoreError::InvalidId(id_str.clone()))?;
    Ok(Contact {
        id,
        display_name: row.get(1)?,
        phone: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

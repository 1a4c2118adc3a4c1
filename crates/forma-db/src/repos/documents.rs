//! Document repository: the `documents` table behind [`DocumentStore`].

use forma_core::document::{Document, without_id};
use forma_core::ids::ObjectId;
use tracing::debug;

use crate::FormaDb;
use crate::error::DatabaseError;
use crate::helpers::{encode_document, merge_fields, parse_document};
use crate::store::{DocumentStore, StoredDocument};

fn row_to_document(row: &libsql::Row) -> Result<StoredDocument, DatabaseError> {
    Ok(StoredDocument {
        id: ObjectId::parse(&row.get::<String>(0)?)?,
        body: parse_document(&row.get::<String>(1)?)?,
    })
}

impl DocumentStore for FormaDb {
    async fn find_all(&self, collection: &str) -> Result<Vec<StoredDocument>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, body FROM documents WHERE collection = ?1 ORDER BY rowid",
                [collection],
            )
            .await?;

        let mut docs = Vec::new();
        while let Some(row) = rows.next().await? {
            docs.push(row_to_document(&row)?);
        }
        debug!(collection, count = docs.len(), "listed documents");
        Ok(docs)
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<StoredDocument>, DatabaseError> {
        let hex = id.to_hex();
        let mut rows = self
            .conn()
            .query(
                "SELECT id, body FROM documents WHERE collection = ?1 AND id = ?2",
                [collection, hex.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_document(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, collection: &str, body: Document) -> Result<ObjectId, DatabaseError> {
        let id = self.generate_object_id().await?;
        let hex = id.to_hex();
        let body = encode_document(&without_id(body))?;

        self.conn()
            .execute(
                "INSERT INTO documents (collection, id, body) VALUES (?1, ?2, ?3)",
                libsql::params![collection, hex.as_str(), body],
            )
            .await?;

        debug!(collection, id = %hex, "inserted document");
        Ok(id)
    }

    /// Read-merge-write without a connection-level transaction: the write is
    /// conditional on the body read, and a lost race re-reads and merges
    /// again. Statements on the shared connection never nest.
    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<bool, DatabaseError> {
        let hex = id.to_hex();
        let fields = without_id(fields);

        loop {
            let mut rows = self
                .conn()
                .query(
                    "SELECT body FROM documents WHERE collection = ?1 AND id = ?2",
                    [collection, hex.as_str()],
                )
                .await?;
            let Some(row) = rows.next().await? else {
                return Ok(false);
            };
            let current = row.get::<String>(0)?;
            drop(row);
            drop(rows);

            let mut body = parse_document(&current)?;
            merge_fields(&mut body, fields.clone());
            let body = encode_document(&body)?;

            let written = self
                .conn()
                .execute(
                    "UPDATE documents SET body = ?1, updated_at = datetime('now')
                     WHERE collection = ?2 AND id = ?3 AND body = ?4",
                    libsql::params![body, collection, hex.as_str(), current],
                )
                .await?;
            if written > 0 {
                debug!(collection, id = %hex, "updated document");
                return Ok(true);
            }
            debug!(collection, id = %hex, "document changed during update, retrying");
        }
    }

    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<(), DatabaseError> {
        let hex = id.to_hex();
        let deleted = self
            .conn()
            .execute(
                "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
                [collection, hex.as_str()],
            )
            .await?;
        debug!(collection, id = %hex, deleted, "deleted document");
        Ok(())
    }
}

//! Schema repository: the `model_schemas` table behind [`SchemaStore`].

use forma_core::field_schema::FieldMap;
use forma_core::schema_record::{SchemaRecord, SchemaRecordDraft};
use forma_schema::{SchemaError, SchemaStore};
use tracing::debug;

use crate::FormaDb;
use crate::error::DatabaseError;

const SELECT_COLUMNS: &str = "SELECT id, collection, display_name, fields FROM model_schemas";

fn row_to_record(row: &libsql::Row) -> Result<SchemaRecord, DatabaseError> {
    let fields: FieldMap = serde_json::from_str(&row.get::<String>(3)?)?;
    Ok(SchemaRecord {
        id: row.get::<String>(0)?,
        collection: row.get::<String>(1)?,
        display_name: row.get::<String>(2)?,
        fields,
    })
}

impl FormaDb {
    async fn schema_by_collection(
        &self,
        collection: &str,
    ) -> Result<Option<SchemaRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("{SELECT_COLUMNS} WHERE collection = ?1"), [collection])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn all_schemas(&self) -> Result<Vec<SchemaRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("{SELECT_COLUMNS} ORDER BY rowid"), ())
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }

    async fn upsert_schema(&self, draft: SchemaRecordDraft) -> Result<SchemaRecord, DatabaseError> {
        let id = match draft.id.clone() {
            Some(id) => id,
            None => self.generate_object_id().await?.to_hex(),
        };
        let fields = serde_json::to_string(&draft.fields)?;

        self.conn()
            .execute(
                "INSERT INTO model_schemas (id, collection, display_name, fields)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     collection = excluded.collection,
                     display_name = excluded.display_name,
                     fields = excluded.fields,
                     updated_at = datetime('now')",
                libsql::params![
                    id.as_str(),
                    draft.collection.as_str(),
                    draft.display_name.as_str(),
                    fields
                ],
            )
            .await?;

        debug!(collection = %draft.collection, id = %id, "saved schema record");
        Ok(draft.into_record(id))
    }

    async fn delete_schema(&self, collection: &str) -> Result<(), DatabaseError> {
        self.conn()
            .execute("DELETE FROM model_schemas WHERE collection = ?1", [collection])
            .await?;
        Ok(())
    }
}

impl SchemaStore for FormaDb {
    async fn find_by_collection(
        &self,
        collection: &str,
    ) -> Result<Option<SchemaRecord>, SchemaError> {
        Ok(self.schema_by_collection(collection).await?)
    }

    async fn find_all(&self) -> Result<Vec<SchemaRecord>, SchemaError> {
        Ok(self.all_schemas().await?)
    }

    async fn save(&self, draft: SchemaRecordDraft) -> Result<SchemaRecord, SchemaError> {
        let collection = draft.collection.clone();
        self.upsert_schema(draft).await.map_err(|e| {
            if e.is_unique_violation() {
                SchemaError::DuplicateSchema { collection }
            } else {
                e.into()
            }
        })
    }

    async fn delete_by_collection(&self, collection: &str) -> Result<(), SchemaError> {
        Ok(self.delete_schema(collection).await?)
    }
}

#[cfg(test)]
mod tests {
    use forma_core::field_schema::{FieldKind, FieldSchema};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::test_db;

    fn draft(id: Option<String>, collection: &str) -> SchemaRecordDraft {
        let mut fields = FieldMap::new();
        fields.insert(
            "skinId".into(),
            FieldSchema::primitive(FieldKind::Number).with_reference(Some("skin".into())),
        );
        fields.insert(
            "tags".into(),
            FieldSchema::array(FieldSchema::primitive(FieldKind::String)),
        );
        SchemaRecordDraft {
            id,
            collection: collection.into(),
            display_name: "Tile".into(),
            fields,
        }
    }

    #[tokio::test]
    async fn saved_record_reads_back_with_field_tree() {
        let db = test_db().await;
        let saved = db.save(draft(None, "tile")).await.unwrap();
        let found = db.find_by_collection("tile").await.unwrap().unwrap();
        assert_eq!(found, saved);
        let keys: Vec<_> = found.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["skinId", "tags"]);
    }

    #[tokio::test]
    async fn second_insert_for_collection_is_duplicate() {
        let db = test_db().await;
        db.save(draft(None, "tile")).await.unwrap();
        let err = db.save(draft(None, "tile")).await.unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateSchema { collection } if collection == "tile"));
    }

    #[tokio::test]
    async fn save_with_id_replaces_in_place() {
        let db = test_db().await;
        let first = db.save(draft(None, "tile")).await.unwrap();
        let mut replacement = draft(Some(first.id.clone()), "tile");
        replacement.display_name = "Tiles".into();
        replacement.fields.shift_remove("tags");
        db.save(replacement).await.unwrap();

        let all = db.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].display_name, "Tiles");
        assert_eq!(all[0].fields.len(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let db = test_db().await;
        db.save(draft(None, "tile")).await.unwrap();
        db.delete_by_collection("tile").await.unwrap();
        db.delete_by_collection("tile").await.unwrap();
        assert!(db.find_by_collection("tile").await.unwrap().is_none());
    }
}

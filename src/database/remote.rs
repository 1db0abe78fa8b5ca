//! Remote document store on PostgreSQL
//!
//! All collections share the `documents` table; each row is one JSONB
//! document addressed by `(collection, id)`. Ids are generated by the server.

use async_trait::async_trait;
use serde_json::Value;
use crate::database::connection::DatabasePool;
use crate::database::store::{Backend, DocumentStore, StoredDocument};
use crate::utils::errors::{BdeError, Result};

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: DatabasePool,
}

impl PgDocumentStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}

fn into_documents(rows: Vec<(String, Value)>) -> Vec<StoredDocument> {
    rows.into_iter()
        .map(|(id, data)| StoredDocument { id, data })
        .collect()
}

fn without_id(mut data: Value) -> Result<Value> {
    match &mut data {
        Value::Object(fields) => {
            fields.remove("id");
            Ok(data)
        }
        _ => Err(BdeError::InvalidInput("Document data must be a JSON object".to_string())),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> Backend {
        Backend::Remote
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        let rows = sqlx::query_as::<_, (String, Value)>(
            "SELECT id, data FROM documents WHERE collection = $1 ORDER BY seq ASC"
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_documents(rows))
    }

    async fn find_by_field(&self, collection: &str, field: &str, value: &str) -> Result<Vec<StoredDocument>> {
        let rows = sqlx::query_as::<_, (String, Value)>(
            "SELECT id, data FROM documents WHERE collection = $1 AND data ->> $2 = $3 ORDER BY seq ASC"
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_documents(rows))
    }

    async fn insert(&self, collection: &str, data: Value) -> Result<StoredDocument> {
        let data = without_id(data)?;
        let (id,) = sqlx::query_as::<_, (String,)>(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES ($1, gen_random_uuid()::text, $2)
            RETURNING id
            "#
        )
        .bind(collection)
        .bind(&data)
        .fetch_one(&self.pool)
        .await?;

        Ok(StoredDocument { id, data })
    }

    async fn put(&self, collection: &str, document: &StoredDocument) -> Result<()> {
        let data = without_id(document.data.clone())?;
        sqlx::query("UPDATE documents SET data = $3 WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(&document.id)
            .bind(data)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_field(&self, collection: &str, field: &str, value: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND data ->> $2 = $3")
            .bind(collection)
            .bind(field)
            .bind(value)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn clear(&self, collection: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1")
            .bind(collection)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn replace_all(&self, collection: &str, documents: &[StoredDocument]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM documents WHERE collection = $1")
            .bind(collection)
            .execute(&mut *tx)
            .await?;

        for document in documents {
            let data = without_id(document.data.clone())?;
            sqlx::query("INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3)")
                .bind(collection)
                .bind(&document.id)
                .bind(data)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

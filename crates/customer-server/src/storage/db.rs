//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use customer_core::{Customer, CustomerError, CustomerStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use uuid::fmt::Hyphenated;
use uuid::Uuid;

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tracing::info!("Creating parent directory: {}", parent.display());
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::from_pool(pool).await
    }

    /// Private in-memory database. Lives as long as its single connection.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid in-memory SQLite URL")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id TEXT PRIMARY KEY,
                firstName TEXT NOT NULL,
                middleName TEXT,
                lastName TEXT NOT NULL,
                email TEXT NOT NULL,
                phoneNumber TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl CustomerStore for Database {
    async fn insert_customer(&self, customer: &Customer) -> customer_core::Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (id, firstName, middleName, lastName, email, phoneNumber)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(customer.id.hyphenated())
        .bind(&customer.first_name)
        .bind(&customer.middle_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.phone_number)
        .execute(&*self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(CustomerError::AlreadyExists(customer.id))
            }
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn get_customer(&self, id: Uuid) -> customer_core::Result<Option<Customer>> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, firstName, middleName, lastName, email, phoneNumber
            FROM customers WHERE id = ?1
            "#,
        )
        .bind(id.hyphenated())
        .fetch_optional(&*self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_customers(&self) -> customer_core::Result<Vec<Customer>> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, firstName, middleName, lastName, email, phoneNumber
            FROM customers
            ORDER BY rowid
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn replace_customer(&self, customer: &Customer) -> customer_core::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET firstName = ?1, middleName = ?2, lastName = ?3, email = ?4, phoneNumber = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.middle_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.phone_number)
        .bind(customer.id.hyphenated())
        .execute(&*self.pool)
        .await
        .map_err(storage_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_customer(&self, id: Uuid) -> customer_core::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM customers WHERE id = ?1
            "#,
        )
        .bind(id.hyphenated())
        .execute(&*self.pool)
        .await
        .map_err(storage_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn storage_error(e: sqlx::Error) -> CustomerError {
    CustomerError::Storage(e.to_string())
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
#[sqlx(rename_all = "camelCase")]
struct CustomerRow {
    id: Hyphenated,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    email: String,
    phone_number: String,
}

impl From<CustomerRow> for Customer {
    fn from(r: CustomerRow) -> Self {
        Customer {
            id: r.id.into_uuid(),
            first_name: r.first_name,
            middle_name: r.middle_name,
            last_name: r.last_name,
            email: r.email,
            phone_number: r.phone_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first_name: &str, email: &str) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            middle_name: None,
            last_name: "Smith".to_string(),
            email: email.to_string(),
            phone_number: "1112223333".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = Database::in_memory().await.unwrap();
        let alice = customer("Alice", "alice@example.com");

        db.insert_customer(&alice).await.unwrap();

        let found = db.get_customer(alice.id).await.unwrap();
        assert_eq!(found, Some(alice));
        assert_eq!(db.get_customer(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let db = Database::in_memory().await.unwrap();
        let alice = customer("Alice", "alice@example.com");

        db.insert_customer(&alice).await.unwrap();
        let err = db.insert_customer(&alice).await.unwrap_err();

        assert!(matches!(err, CustomerError::AlreadyExists(id) if id == alice.id));
        assert_eq!(db.list_customers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let db = Database::in_memory().await.unwrap();
        let names = ["Carol", "Alice", "Bob"];
        for name in names {
            db.insert_customer(&customer(name, "x@example.com"))
                .await
                .unwrap();
        }

        let listed: Vec<_> = db
            .list_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.first_name)
            .collect();
        assert_eq!(listed, names);
    }

    #[tokio::test]
    async fn test_replace_and_delete() {
        let db = Database::in_memory().await.unwrap();
        let mut alice = customer("Alice", "alice@example.com");
        db.insert_customer(&alice).await.unwrap();

        alice.first_name = "Updated".to_string();
        alice.middle_name = Some("Q".to_string());
        assert!(db.replace_customer(&alice).await.unwrap());
        assert_eq!(db.get_customer(alice.id).await.unwrap(), Some(alice.clone()));

        let stranger = customer("Nobody", "nobody@example.com");
        assert!(!db.replace_customer(&stranger).await.unwrap());
        assert_eq!(db.list_customers().await.unwrap().len(), 1);

        assert!(db.delete_customer(alice.id).await.unwrap());
        assert!(!db.delete_customer(alice.id).await.unwrap());
        assert!(db.list_customers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_database_persists_across_reopen() {
        let dir = std::env::temp_dir().join(format!("customer_db_test_{}", Uuid::new_v4()));
        let path = dir.join("customers.db");
        let path = path.to_string_lossy().to_string();

        let alice = customer("Alice", "alice@example.com");
        {
            let db = Database::new(&path, 2).await.unwrap();
            db.insert_customer(&alice).await.unwrap();
            db.pool.close().await;
        }

        let db = Database::new(&path, 2).await.unwrap();
        assert_eq!(db.get_customer(alice.id).await.unwrap(), Some(alice));
        db.pool.close().await;

        let _ = std::fs::remove_dir_all(&dir);
    }
}

//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use customer_types::Customer;
use uuid::Uuid;

/// Customer store
///
/// Implementations must be safe to share between concurrent requests, and each
/// call must be atomic: a failed write leaves nothing behind.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a new record. Fails with `AlreadyExists` if the id is taken.
    async fn insert_customer(&self, customer: &Customer) -> Result<()>;
    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>>;
    /// All records in insertion order
    async fn list_customers(&self) -> Result<Vec<Customer>>;
    /// Replace every field of an existing record. Returns false if no record has that id.
    async fn replace_customer(&self, customer: &Customer) -> Result<bool>;
    /// Returns false if no record has that id.
    async fn delete_customer(&self, id: Uuid) -> Result<bool>;
}

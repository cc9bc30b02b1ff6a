//! Record store service
//!
//! Owns the customer rules on top of a `CustomerStore` backend: validation
//! before every write, id assignment on create, id matching and an explicit
//! existence check on update.

use customer_core::validation::validate_customer;
use customer_core::{Customer, CustomerError, CustomerPayload, CustomerStore, Result};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub struct RecordStore {
    store: Arc<dyn CustomerStore>,
}

impl RecordStore {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Customer>> {
        let customers = self.store.list_customers().await?;
        debug!("Listed {} customers", customers.len());
        Ok(customers)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Customer>> {
        self.store.get_customer(id).await
    }

    pub async fn create(&self, payload: CustomerPayload) -> Result<Customer> {
        let customer = validate_customer(payload)?;
        self.store.insert_customer(&customer).await?;

        info!("Created customer: id={}", customer.id);
        Ok(customer)
    }

    /// Replace every field of customer `id`. The payload must carry the same id.
    pub async fn update(&self, id: Uuid, payload: CustomerPayload) -> Result<()> {
        if payload.id != Some(id) {
            return Err(CustomerError::IdMismatch {
                path: id,
                body: payload.id,
            });
        }

        let customer = validate_customer(payload)?;
        if !self.store.replace_customer(&customer).await? {
            return Err(CustomerError::NotFound(id));
        }

        info!("Updated customer: id={}", id);
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete_customer(id).await? {
            return Err(CustomerError::NotFound(id));
        }

        info!("Deleted customer: id={}", id);
        Ok(())
    }
}

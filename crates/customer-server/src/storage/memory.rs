//! In-memory customer store using DashMap

use async_trait::async_trait;
use customer_core::{Customer, CustomerError, CustomerStore, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Process-local store, used for tests and for running without a database file
pub struct MemoryStore {
    data: DashMap<Uuid, StoredCustomer>,
    next_seq: AtomicU64,
}

struct StoredCustomer {
    // Insertion sequence, so listing keeps creation order
    seq: u64,
    customer: Customer,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn insert_customer(&self, customer: &Customer) -> Result<()> {
        match self.data.entry(customer.id) {
            Entry::Occupied(_) => Err(CustomerError::AlreadyExists(customer.id)),
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(StoredCustomer {
                    seq,
                    customer: customer.clone(),
                });
                Ok(())
            }
        }
    }

    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>> {
        Ok(self.data.get(&id).map(|entry| entry.customer.clone()))
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let mut entries: Vec<(u64, Customer)> = self
            .data
            .iter()
            .map(|entry| (entry.seq, entry.customer.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);

        Ok(entries.into_iter().map(|(_, customer)| customer).collect())
    }

    async fn replace_customer(&self, customer: &Customer) -> Result<bool> {
        match self.data.get_mut(&customer.id) {
            Some(mut entry) => {
                entry.customer = customer.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_customer(&self, id: Uuid) -> Result<bool> {
        Ok(self.data.remove(&id).is_some())
    }
}

use std::{
    collections::HashMap,
    sync::atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{address::Address, errors::DomainError},
    infrastructure::AddressRepository,
};

/// Map-backed repository used by unit and contract tests.
pub struct InMemoryAddressRepository {
    addresses_by_id: RwLock<HashMap<i64, Address>>,
    next_id: AtomicI64,
}

impl InMemoryAddressRepository {
    pub fn new() -> Self {
        Self {
            addresses_by_id: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryAddressRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Address>, DomainError> {
        Ok(self.addresses_by_id.read().await.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.addresses_by_id.read().await.contains_key(&id))
    }

    async fn save(&self, mut address: Address) -> Result<Address, DomainError> {
        let mut addresses_by_id = self.addresses_by_id.write().await;

        let id = match address.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        address.id = Some(id);
        addresses_by_id.insert(id, address.clone());

        Ok(address)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        self.addresses_by_id.write().await.remove(&id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Address>, DomainError> {
        let mut items = self
            .addresses_by_id
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }
}

use async_trait::async_trait;

use crate::domain::{address::Address, errors::DomainError};

pub mod in_memory_address_repository;
pub mod postgres_address_repository;

/// Storage port for address rows. `save` inserts when the entity carries
/// no id and replaces the existing row otherwise; inserts assign the next
/// monotonic id.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Address>, DomainError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
    async fn save(&self, address: Address) -> Result<Address, DomainError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
    async fn find_all(&self) -> Result<Vec<Address>, DomainError>;
}

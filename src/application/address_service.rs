use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::{
    application::{
        dto::{AddressRequest, AddressResponse},
        mapper,
    },
    domain::{audit::Auditable, errors::DomainError},
    infrastructure::AddressRepository,
};

/// Orchestrates mapper and repository per operation. Audit fields are
/// stamped here, immediately before the storage call; a request can never
/// influence identity, creation audit, or ownership.
#[derive(Clone)]
pub struct AddressService {
    repository: Arc<dyn AddressRepository>,
}

impl AddressService {
    pub fn new(repository: Arc<dyn AddressRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_address(
        &self,
        request: Option<AddressRequest>,
    ) -> Result<AddressResponse, DomainError> {
        let request = request
            .ok_or_else(|| DomainError::invalid_argument("address request must be provided"))?;

        let mut address = mapper::to_entity(&request);
        address.audit_mut().stamp_created(Utc::now());

        let saved = self.repository.save(address).await?;
        debug!(id = ?saved.id, "created address");
        Ok(mapper::to_response(&saved))
    }

    pub async fn get_address(&self, id: i64) -> Result<AddressResponse, DomainError> {
        let Some(address) = self.repository.find_by_id(id).await? else {
            return Err(not_found(Some(id)));
        };
        Ok(mapper::to_response(&address))
    }

    pub async fn update_address(
        &self,
        id: i64,
        request: Option<AddressRequest>,
    ) -> Result<AddressResponse, DomainError> {
        let request = request
            .ok_or_else(|| DomainError::invalid_argument("address request must be provided"))?;

        let Some(existing) = self.repository.find_by_id(id).await? else {
            return Err(not_found(Some(id)));
        };

        let mut updated = mapper::to_entity(&request);
        updated.id = existing.id;
        updated.user_id = existing.user_id;
        updated.audit.created_at = existing.audit.created_at;
        updated.audit.created_by = existing.audit.created_by;
        updated.audit_mut().stamp_updated(Utc::now());

        let saved = self.repository.save(updated).await?;
        debug!(id = ?saved.id, "updated address");
        Ok(mapper::to_response(&saved))
    }

    pub async fn delete_address(&self, id: Option<i64>) -> Result<(), DomainError> {
        // An absent identity reports not-found, the same as an unknown one.
        let Some(id) = id else {
            return Err(not_found(None));
        };

        if !self.repository.exists_by_id(id).await? {
            return Err(not_found(Some(id)));
        }

        self.repository.delete_by_id(id).await?;
        debug!(id, "deleted address");
        Ok(())
    }

    pub async fn list_addresses(&self) -> Result<Vec<AddressResponse>, DomainError> {
        let addresses = self.repository.find_all().await?;
        Ok(addresses.iter().map(mapper::to_response).collect())
    }
}

fn not_found(id: Option<i64>) -> DomainError {
    match id {
        Some(id) => DomainError::not_found(format!("Address not found with id: {id}")),
        None => DomainError::not_found("Address not found with id: null"),
    }
}

//! Pure transforms between wire DTOs and persisted entities. Inbound
//! mapping never sets server-assigned, audit, or ownership fields; the
//! `_opt` variants propagate absence instead of failing.

use crate::{
    application::dto::{AddressRequest, AddressResponse, UserRequest, UserResponse},
    domain::{address::Address, user::User},
};

pub fn to_entity(request: &AddressRequest) -> Address {
    Address {
        street: request.street.clone(),
        city: request.city.clone(),
        state: request.state.clone(),
        zip_code: request.zip_code.clone(),
        country: request.country.clone(),
        ..Address::default()
    }
}

pub fn to_response(address: &Address) -> AddressResponse {
    AddressResponse {
        id: address.id,
        street: address.street.clone(),
        city: address.city.clone(),
        state: address.state.clone(),
        zip_code: address.zip_code.clone(),
        country: address.country.clone(),
        created_at: address.audit.created_at,
        updated_at: address.audit.updated_at,
        created_by: address.audit.created_by.clone(),
        last_modified_by: address.audit.last_modified_by.clone(),
    }
}

pub fn to_entity_opt(request: Option<&AddressRequest>) -> Option<Address> {
    request.map(to_entity)
}

pub fn to_response_opt(address: Option<&Address>) -> Option<AddressResponse> {
    address.map(to_response)
}

pub fn user_to_entity(request: &UserRequest) -> User {
    User {
        name: request.name.clone(),
        email: request.email.clone(),
        address: request.address.iter().map(to_entity).collect(),
        ..User::default()
    }
}

pub fn user_to_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: user.audit.created_at,
        updated_at: user.audit.updated_at,
        created_by: user.audit.created_by.clone(),
        last_modified_by: user.audit.last_modified_by.clone(),
        address: user.address.iter().map(to_response).collect(),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single field-level validation failure, reported to the boundary as
/// part of a 400 problem response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl AddressRequest {
    /// Boundary validation; the entity layer itself never enforces
    /// non-blankness.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let violations = self.collect_violations("");
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    fn collect_violations(&self, prefix: &str) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        let checks = [
            (&self.street, "street", "Street cannot be blank"),
            (&self.city, "city", "City cannot be blank"),
            (&self.state, "state", "State cannot be blank"),
            (&self.zip_code, "zipCode", "Zip code cannot be blank"),
            (&self.country, "country", "Country cannot be blank"),
        ];
        for (value, field, message) in checks {
            if value.trim().is_empty() {
                violations.push(FieldViolation::new(format!("{prefix}{field}"), message));
            }
        }
        violations
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub id: Option<i64>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub last_modified_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Vec<AddressRequest>,
}

impl UserRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation::new("name", "Name must not be blank"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            violations.push(FieldViolation::new("email", "Email must not be blank"));
        } else if !is_valid_email(email) {
            violations.push(FieldViolation::new("email", "Email should be valid"));
        }

        if self.address.is_empty() {
            violations.push(FieldViolation::new(
                "address",
                "At least one address is required",
            ));
        }
        for (index, address) in self.address.iter().enumerate() {
            violations.extend(address.collect_violations(&format!("address[{index}].")));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub last_modified_by: Option<String>,
    pub address: Vec<AddressResponse>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return false;
    }

    !value.contains(' ')
}

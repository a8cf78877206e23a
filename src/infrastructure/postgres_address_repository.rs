use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::{
    domain::{address::Address, audit::AuditFields, errors::DomainError},
    infrastructure::AddressRepository,
};

const ADDRESS_COLUMNS: &str = "id, street, city, state, zip_code, country, user_id, \
     created_date, updated_date, created_by, last_modified_by";

/// sqlx-backed repository. Every port method is a single statement, so
/// each call runs in one implicit transaction.
#[derive(Clone)]
pub struct PostgresAddressRepository {
    pool: PgPool,
}

impl PostgresAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PostgresAddressRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Address>, DomainError> {
        let maybe_row = sqlx::query(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM address WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_address))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM address WHERE id = $1) AS present")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.get::<bool, _>("present"))
    }

    async fn save(&self, address: Address) -> Result<Address, DomainError> {
        let row = match address.id {
            None => {
                sqlx::query(&format!(
                    "INSERT INTO address \
                         (street, city, state, zip_code, country, user_id, \
                          created_date, updated_date, created_by, last_modified_by) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
                     RETURNING {ADDRESS_COLUMNS}"
                ))
                .bind(&address.street)
                .bind(&address.city)
                .bind(&address.state)
                .bind(&address.zip_code)
                .bind(&address.country)
                .bind(address.user_id)
                .bind(address.audit.created_at)
                .bind(address.audit.updated_at)
                .bind(&address.audit.created_by)
                .bind(&address.audit.last_modified_by)
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query(&format!(
                    "UPDATE address SET \
                         street = $2, city = $3, state = $4, zip_code = $5, country = $6, \
                         user_id = $7, created_date = $8, updated_date = $9, \
                         created_by = $10, last_modified_by = $11 \
                     WHERE id = $1 \
                     RETURNING {ADDRESS_COLUMNS}"
                ))
                .bind(id)
                .bind(&address.street)
                .bind(&address.city)
                .bind(&address.state)
                .bind(&address.zip_code)
                .bind(&address.country)
                .bind(address.user_id)
                .bind(address.audit.created_at)
                .bind(address.audit.updated_at)
                .bind(&address.audit.created_by)
                .bind(&address.audit.last_modified_by)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx_error)?;

        Ok(row_to_address(&row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM address WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Address>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM address ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_address).collect())
    }
}

fn row_to_address(row: &sqlx::postgres::PgRow) -> Address {
    Address {
        id: row.get::<Option<i64>, _>("id"),
        street: row.get::<String, _>("street"),
        city: row.get::<String, _>("city"),
        state: row.get::<String, _>("state"),
        zip_code: row.get::<String, _>("zip_code"),
        country: row.get::<String, _>("country"),
        user_id: row.get::<Option<i64>, _>("user_id"),
        audit: AuditFields {
            created_at: row.get::<Option<DateTime<Utc>>, _>("created_date"),
            updated_at: row.get::<Option<DateTime<Utc>>, _>("updated_date"),
            created_by: row.get::<Option<String>, _>("created_by"),
            last_modified_by: row.get::<Option<String>, _>("last_modified_by"),
        },
    }
}

fn map_sqlx_error(error: sqlx::Error) -> DomainError {
    DomainError::storage(error.to_string())
}

use crate::domain::audit::{AuditFields, Auditable};

/// A postal address row. `id` is `None` until the repository assigns one;
/// `user_id` is a weak link to the owning user and may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub id: Option<i64>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub user_id: Option<i64>,
    pub audit: AuditFields,
}

impl Auditable for Address {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}

use crate::domain::{
    address::Address,
    audit::{AuditFields, Auditable},
};

/// An account row owning its address collection exclusively: removing an
/// address from the collection deletes the orphaned row (cascade in the
/// relational schema). An address detached from a user keeps existing on
/// its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub address: Vec<Address>,
    pub audit: AuditFields,
}

impl Auditable for User {
    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        &mut self.audit
    }
}

use chrono::{DateTime, Utc};

/// Actor recorded when a row is first persisted.
pub const CREATED_BY_ACTOR: &str = "System";
/// Actor recorded on every modification, including the initial persist.
/// The casing differs from [`CREATED_BY_ACTOR`] and downstream consumers
/// match on the exact strings.
pub const MODIFIED_BY_ACTOR: &str = "system";

/// Audit metadata maintained on every persisted entity. All fields stay
/// `None` until the owning service stamps them at the storage boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditFields {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub last_modified_by: Option<String>,
}

impl AuditFields {
    /// Stamps a first persist: both timestamps get the same instant.
    pub fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = Some(now);
        self.updated_at = Some(now);
        self.created_by = Some(CREATED_BY_ACTOR.to_string());
        self.last_modified_by = Some(MODIFIED_BY_ACTOR.to_string());
    }

    /// Stamps a subsequent persist; creation fields are never touched here.
    pub fn stamp_updated(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
        self.last_modified_by = Some(MODIFIED_BY_ACTOR.to_string());
    }
}

/// Uniform access to the audit block of a persisted entity.
pub trait Auditable {
    fn audit(&self) -> &AuditFields;
    fn audit_mut(&mut self) -> &mut AuditFields;
}

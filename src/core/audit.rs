use std::error;
use std::sync::Arc;

use crate::common::info;

pub type AuditError = Box<dyn error::Error + Send + Sync>;

/// Sink for audit records emitted while credentials are checked.
pub trait Audit {
    fn record(&self, message: &str) -> Result<(), AuditError>;
}

impl<A: Audit + ?Sized> Audit for &A {
    fn record(&self, message: &str) -> Result<(), AuditError> {
        (**self).record(message)
    }
}

impl<A: Audit + ?Sized> Audit for Box<A> {
    fn record(&self, message: &str) -> Result<(), AuditError> {
        (**self).record(message)
    }
}

impl<A: Audit + ?Sized> Audit for Arc<A> {
    fn record(&self, message: &str) -> Result<(), AuditError> {
        (**self).record(message)
    }
}

// Forward audit records to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudit;

impl Audit for TracingAudit {
    fn record(&self, message: &str) -> Result<(), AuditError> {
        info!(target: "principal_auth::audit", "{}", message);
        Ok(())
    }
}

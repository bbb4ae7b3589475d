use crate::common::{debug, info};
use crate::core::audit::{Audit, TracingAudit};
use crate::core::credential::{
    check_admin, check_anonymous_user, check_external_system, check_registered_user, AcceptAll,
    Verifier,
};
use crate::core::Principal;

/// Dispatches a [`Principal`] to the credential check of its variant.
///
/// Verifier faults are returned to the caller as they are. `Ok(false)` means the
/// check completed and rejected the principal.
#[derive(Debug, Clone)]
pub struct Authenticator<V, A = TracingAudit> {
    verifier: V,
    audit: A,
}

impl<V> Authenticator<V, TracingAudit> {
    pub fn with_verifier(verifier: V) -> Self {
        Self::new(verifier, TracingAudit)
    }
}

impl Default for Authenticator<AcceptAll, TracingAudit> {
    fn default() -> Self {
        Self::new(AcceptAll, TracingAudit)
    }
}

impl<V, A> Authenticator<V, A> {
    pub fn new(verifier: V, audit: A) -> Self {
        Self { verifier, audit }
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }
}

impl<V, A> Authenticator<V, A>
where
    V: Verifier,
    A: Audit,
{
    pub fn authenticate(&self, principal: &Principal) -> Result<bool, V::Error> {
        debug!("Authenticating principal {}", principal.name());

        // No wildcard arm, a new variant must be handled here to compile.
        let authenticated = match principal {
            Principal::AnonymousUser(user) => {
                check_anonymous_user(user, &self.verifier, &self.audit)?
            }
            Principal::RegisteredUser(user) => {
                check_registered_user(user, &self.verifier, &self.audit)?
            }
            Principal::Admin(admin) => check_admin(admin, &self.verifier, &self.audit)?,
            Principal::ExternalSystem(system) => {
                check_external_system(system, &self.verifier, &self.audit)?
            }
        };

        info!(%principal, authenticated, "Authenticate done");

        Ok(authenticated)
    }

    // Narrowing query rather than a dispatch, anything but an admin is simply false.
    pub fn is_authenticated_admin(&self, principal: &Principal) -> Result<bool, V::Error> {
        if let Principal::Admin(admin) = principal {
            check_admin(admin, &self.verifier, &self.audit)
        } else {
            Ok(false)
        }
    }
}

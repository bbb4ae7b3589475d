use crate::common::warn;
use crate::core::audit::Audit;
use crate::core::credential::{Credential, Provider, Verifier};
use crate::core::principal::{Admin, AnonymousUser, ExternalSystem, PrincipalKind, RegisteredUser};

// One check per principal variant. each records exactly one audit message and
// consults the verifier at most once.

pub fn check_anonymous_user<V, A>(
    user: &AnonymousUser,
    verifier: &V,
    audit: &A,
) -> Result<bool, V::Error>
where
    V: Verifier + ?Sized,
    A: Audit + ?Sized,
{
    record(audit, PrincipalKind::AnonymousUser, user.name());
    verify(user, verifier)
}

pub fn check_registered_user<V, A>(
    user: &RegisteredUser,
    verifier: &V,
    audit: &A,
) -> Result<bool, V::Error>
where
    V: Verifier + ?Sized,
    A: Audit + ?Sized,
{
    record(audit, PrincipalKind::RegisteredUser, user.name());
    verify(user, verifier)
}

pub fn check_admin<V, A>(admin: &Admin, verifier: &V, audit: &A) -> Result<bool, V::Error>
where
    V: Verifier + ?Sized,
    A: Audit + ?Sized,
{
    record(audit, PrincipalKind::Admin, admin.name());
    verify(admin, verifier)
}

/// Checks the system key only. The owning admin is not re-verified.
pub fn check_external_system<V, A>(
    system: &ExternalSystem,
    verifier: &V,
    audit: &A,
) -> Result<bool, V::Error>
where
    V: Verifier + ?Sized,
    A: Audit + ?Sized,
{
    record(audit, PrincipalKind::ExternalSystem, system.name());
    verify(system, verifier)
}

fn verify<V>(provider: &impl Provider, verifier: &V) -> Result<bool, V::Error>
where
    V: Verifier + ?Sized,
{
    match provider.credential() {
        Credential::Anonymous => Ok(true),
        Credential::Password(password) => verifier.verify(&password.identifier, &password.secret),
    }
}

// Audit failures are logged and dropped, they never decide the result.
fn record<A: Audit + ?Sized>(audit: &A, kind: PrincipalKind, name: &str) {
    let message = format!("Checking credentials for {} {}", kind, name);
    if let Err(err) = audit.record(&message) {
        warn!(%err, %kind, principal = name, "Audit record failed");
    }
}

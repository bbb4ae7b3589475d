mod user;
pub use user::{AnonymousUser, RegisteredUser};

mod admin;
pub use admin::Admin;

mod system;
pub use system::ExternalSystem;

use std::fmt;

/// Identity subject to authentication.
///
/// The set of variants is closed. Every dispatch over `Principal` in this crate is an
/// exhaustive `match` without a wildcard arm, so adding a variant fails to build until
/// each dispatcher handles it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Principal {
    AnonymousUser(AnonymousUser),
    RegisteredUser(RegisteredUser),
    Admin(Admin),
    ExternalSystem(ExternalSystem),
}

/// Payload free tag of a [`Principal`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrincipalKind {
    AnonymousUser,
    RegisteredUser,
    Admin,
    ExternalSystem,
}

impl PrincipalKind {
    pub const ALL: [PrincipalKind; 4] = [
        PrincipalKind::AnonymousUser,
        PrincipalKind::RegisteredUser,
        PrincipalKind::Admin,
        PrincipalKind::ExternalSystem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalKind::AnonymousUser => "anonymous user",
            PrincipalKind::RegisteredUser => "registered user",
            PrincipalKind::Admin => "admin",
            PrincipalKind::ExternalSystem => "system",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Principal {
    /// Display identifier of the principal.
    pub fn name(&self) -> &str {
        match self {
            Principal::AnonymousUser(user) => user.name(),
            Principal::RegisteredUser(user) => user.name(),
            Principal::Admin(admin) => admin.name(),
            Principal::ExternalSystem(system) => system.name(),
        }
    }

    pub fn kind(&self) -> PrincipalKind {
        match self {
            Principal::AnonymousUser(_) => PrincipalKind::AnonymousUser,
            Principal::RegisteredUser(_) => PrincipalKind::RegisteredUser,
            Principal::Admin(_) => PrincipalKind::Admin,
            Principal::ExternalSystem(_) => PrincipalKind::ExternalSystem,
        }
    }

    pub fn anonymous() -> Self {
        Principal::AnonymousUser(AnonymousUser)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.name())
    }
}

impl From<AnonymousUser> for Principal {
    fn from(user: AnonymousUser) -> Self {
        Principal::AnonymousUser(user)
    }
}

impl From<RegisteredUser> for Principal {
    fn from(user: RegisteredUser) -> Self {
        Principal::RegisteredUser(user)
    }
}

impl From<Admin> for Principal {
    fn from(admin: Admin) -> Self {
        Principal::Admin(admin)
    }
}

impl From<ExternalSystem> for Principal {
    fn from(system: ExternalSystem) -> Self {
        Principal::ExternalSystem(system)
    }
}

mod config;
pub use self::config::{Config, VerifierKind};

pub mod principal;
pub use self::principal::{
    Admin, AnonymousUser, ExternalSystem, Principal, PrincipalKind, RegisteredUser,
};

pub mod credential;
pub use self::credential::{
    AcceptAll, ConfiguredVerifier, CredentialEntry, CredentialTable, Verifier,
};

pub mod audit;
pub use self::audit::{Audit, AuditError, TracingAudit};

mod authenticator;
pub use self::authenticator::Authenticator;

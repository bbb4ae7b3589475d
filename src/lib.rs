#![allow(clippy::module_inception)]

pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use crate::error::{DecodeError, Error, ErrorKind, UnknownCategory};
pub type Result<T, E = crate::error::Error> = std::result::Result<T, E>;

pub use crate::core::{
    AcceptAll, Admin, AnonymousUser, Audit, Authenticator, ExternalSystem, Principal,
    PrincipalKind, RegisteredUser, TracingAudit, Verifier,
};
pub use crate::protocol::interchange::{decode, encode, encode_pretty};

pub(crate) mod common {
    pub(crate) type Result<T, E = crate::error::Error> = std::result::Result<T, E>;

    pub use tracing::{debug, info, trace, warn};
}

mod verifier;
pub use self::verifier::{AcceptAll, ConfiguredVerifier, CredentialEntry, CredentialTable, Verifier};

mod check;
pub use self::check::{check_admin, check_anonymous_user, check_external_system, check_registered_user};

use std::borrow::Cow;

use crate::core::principal::{Admin, AnonymousUser, ExternalSystem, RegisteredUser};

// Credential is what a principal presents to the verifier.
#[derive(PartialEq)]
pub enum Credential<'a> {
    // Nothing to check.
    Anonymous,
    Password(Password<'a>),
}

#[derive(PartialEq)]
pub struct Password<'a> {
    pub identifier: Cow<'a, str>,
    pub secret: Cow<'a, str>,
}

impl<'a> Password<'a> {
    fn borrowed(identifier: &'a str, secret: &'a str) -> Self {
        Self {
            identifier: Cow::Borrowed(identifier),
            secret: Cow::Borrowed(secret),
        }
    }
}

pub trait Provider {
    fn credential(&self) -> Credential<'_>;
}

impl Provider for AnonymousUser {
    fn credential(&self) -> Credential<'_> {
        Credential::Anonymous
    }
}

impl Provider for RegisteredUser {
    fn credential(&self) -> Credential<'_> {
        Credential::Password(Password::borrowed(self.username(), self.password()))
    }
}

impl Provider for Admin {
    fn credential(&self) -> Credential<'_> {
        Credential::Password(Password::borrowed(self.name(), self.admin_credentials()))
    }
}

// The owner's credentials are not part of the system credential.
// owning an admin record does not prove a live admin login.
impl Provider for ExternalSystem {
    fn credential(&self) -> Credential<'_> {
        Credential::Password(Password::borrowed(self.name(), self.system_key()))
    }
}

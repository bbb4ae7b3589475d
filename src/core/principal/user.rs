use std::fmt;
use std::hash::{Hash, Hasher};

// Principal which has not presented any credential.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnonymousUser;

impl AnonymousUser {
    pub const ANONYMOUS: &'static str = "ANONYMOUS";

    pub fn name(&self) -> &str {
        AnonymousUser::ANONYMOUS
    }
}

/// User identified by username and password.
///
/// Equality compares both username and password, while [`Hash`] is computed from the
/// password alone. Distinct users sharing a password therefore collide in hashed
/// collections; they still compare unequal.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    username: String,
    password: String,
}

impl RegisteredUser {
    pub fn new<S1, S2>(username: S1, password: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.username
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Hash for RegisteredUser {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.password.hash(state);
    }
}

impl fmt::Debug for RegisteredUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RegisteredUser")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

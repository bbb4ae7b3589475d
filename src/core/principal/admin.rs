use std::fmt;

use serde::Serialize;

// Administrator principal.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    name: String,
    admin_credentials: String,
}

impl Admin {
    pub fn new<S1, S2>(name: S1, admin_credentials: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            name: name.into(),
            admin_credentials: admin_credentials.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn admin_credentials(&self) -> &str {
        &self.admin_credentials
    }
}

impl fmt::Debug for Admin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Admin")
            .field("name", &self.name)
            .field("admin_credentials", &"***")
            .finish()
    }
}

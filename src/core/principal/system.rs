use std::fmt;

use serde::Serialize;

use crate::core::principal::Admin;

/// Non human principal acting on behalf of an owning [`Admin`].
///
/// The owner is held by value. Cloning or decoding an `ExternalSystem` yields its own
/// `Admin`, never a shared one.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSystem {
    name: String,
    system_key: String,
    owner: Admin,
}

impl ExternalSystem {
    pub fn new<S1, S2>(name: S1, system_key: S2, owner: Admin) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            name: name.into(),
            system_key: system_key.into(),
            owner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn system_key(&self) -> &str {
        &self.system_key
    }

    pub fn owner(&self) -> &Admin {
        &self.owner
    }
}

impl fmt::Debug for ExternalSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ExternalSystem")
            .field("name", &self.name)
            .field("system_key", &"***")
            .field("owner", &self.owner)
            .finish()
    }
}

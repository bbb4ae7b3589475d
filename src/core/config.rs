use serde::Deserialize;

use crate::core::credential::{AcceptAll, ConfiguredVerifier, CredentialEntry, CredentialTable};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerifierKind {
    #[default]
    AcceptAll,
    Table,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub verifier: VerifierKind,
    #[serde(default)]
    pub credentials: Vec<CredentialEntry>,
}

impl Config {
    pub(crate) fn build_verifier(&self) -> ConfiguredVerifier {
        match self.verifier {
            VerifierKind::AcceptAll => ConfiguredVerifier::AcceptAll(AcceptAll),
            VerifierKind::Table => {
                ConfiguredVerifier::Table(CredentialTable::new(self.credentials.clone()))
            }
        }
    }
}

use std::convert::Infallible;
use std::sync::Arc;

use serde::Deserialize;

/// Capability deciding whether an identifier and secret pair is valid.
///
/// A returned `Err` is a fault of the verifier itself (backend unavailable and the like),
/// distinct from `Ok(false)` which is a completed check that rejected the pair.
pub trait Verifier {
    type Error;

    fn verify(&self, identifier: &str, secret: &str) -> Result<bool, Self::Error>;
}

impl<V: Verifier + ?Sized> Verifier for &V {
    type Error = V::Error;

    fn verify(&self, identifier: &str, secret: &str) -> Result<bool, Self::Error> {
        (**self).verify(identifier, secret)
    }
}

impl<V: Verifier + ?Sized> Verifier for Box<V> {
    type Error = V::Error;

    fn verify(&self, identifier: &str, secret: &str) -> Result<bool, Self::Error> {
        (**self).verify(identifier, secret)
    }
}

impl<V: Verifier + ?Sized> Verifier for Arc<V> {
    type Error = V::Error;

    fn verify(&self, identifier: &str, secret: &str) -> Result<bool, Self::Error> {
        (**self).verify(identifier, secret)
    }
}

/// Verifier accepting every pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Verifier for AcceptAll {
    type Error = Infallible;

    fn verify(&self, _identifier: &str, _secret: &str) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CredentialEntry {
    pub identifier: String,
    pub secret: String,
}

// Verifier backed by a static list of known credentials.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    entries: Vec<CredentialEntry>,
}

impl CredentialTable {
    pub fn new(entries: Vec<CredentialEntry>) -> Self {
        Self { entries }
    }
}

impl Verifier for CredentialTable {
    type Error = Infallible;

    fn verify(&self, identifier: &str, secret: &str) -> Result<bool, Self::Error> {
        Ok(self
            .entries
            .iter()
            .any(|entry| entry.identifier == identifier && entry.secret == secret))
    }
}

// Verifier selected by configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredVerifier {
    AcceptAll(AcceptAll),
    Table(CredentialTable),
}

impl Verifier for ConfiguredVerifier {
    type Error = Infallible;

    fn verify(&self, identifier: &str, secret: &str) -> Result<bool, Self::Error> {
        match self {
            ConfiguredVerifier::AcceptAll(v) => v.verify(identifier, secret),
            ConfiguredVerifier::Table(v) => v.verify(identifier, secret),
        }
    }
}

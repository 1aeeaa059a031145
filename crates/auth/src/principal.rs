use serde::{Deserialize, Serialize};

use credguard_core::{DomainError, DomainResult, ValueObject};

use crate::Role;

/// Unique login identity of a principal.
///
/// Grants are scoped to this value, so it is validated once at construction
/// and compared structurally afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Surrounding whitespace is stripped; an empty result is rejected.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("username must not be empty"));
        }
        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Username {}

impl core::fmt::Display for Username {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Secret used to verify a principal's identity.
///
/// Only ever deserialized: it has no `Serialize` impl and its `Debug` output is
/// redacted, so it cannot leak through API responses or log fields. There is no
/// `PartialEq` either; verification goes through [`Credential::expose`] and
/// whatever comparison the verifier owns.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Raw secret, for the verifier that compares it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// What an authentication layer needs to know about a principal.
///
/// Login flows depend on this trait rather than on [`crate::User`], which keeps
/// the record itself a plain data type.
pub trait PrincipalDetails {
    fn username(&self) -> &Username;

    fn credential(&self) -> Option<&Credential>;

    fn is_account_active(&self) -> bool;

    fn is_account_unlocked(&self) -> bool;

    fn is_credential_active(&self) -> bool;

    fn is_account_enabled(&self) -> bool;

    fn has_role(&self, role: Role) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed() {
        assert_eq!(Username::new("  alice ").unwrap().as_str(), "alice");
        assert_eq!(Username::new("bob").unwrap().to_string(), "bob");
    }

    #[test]
    fn blank_username_rejected() {
        assert!(matches!(Username::new("   "), Err(DomainError::Validation(_))));
        assert!(serde_json::from_str::<Username>("\"\"").is_err());
    }

    #[test]
    fn credential_debug_is_redacted() {
        let credential = Credential::new("hunter2");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
        assert_eq!(credential.expose(), "hunter2");
    }
}

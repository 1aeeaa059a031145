use core::str::FromStr;

use serde::{Deserialize, Serialize};

use credguard_core::DomainError;

use crate::{Grant, Username};

/// Role catalog used for RBAC.
///
/// The set is closed: anything that is not listed here is rejected when it is
/// parsed or deserialized, so a `Role` value is always valid by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Operator,
    User,
}

impl Role {
    /// Every role in the catalog.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Operator, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Operator => "OPERATOR",
            Role::User => "USER",
        }
    }

    /// The grant stating that `principal` holds this role.
    pub fn grant_for(self, principal: &Username) -> Grant {
        Grant::new(self, principal.clone())
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown role '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Username {
        Username::new("alice").unwrap()
    }

    #[test]
    fn grant_for_is_deterministic() {
        assert_eq!(Role::Admin.grant_for(&alice()), Role::Admin.grant_for(&alice()));
        assert_ne!(Role::Admin.grant_for(&alice()), Role::User.grant_for(&alice()));
    }

    #[test]
    fn grant_is_scoped_to_principal() {
        let bob = Username::new("bob").unwrap();
        assert_ne!(Role::Admin.grant_for(&alice()), Role::Admin.grant_for(&bob));
        assert_eq!(Role::Admin.grant_for(&bob).principal(), &bob);
    }

    #[test]
    fn parses_every_catalog_name() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_rejected_at_parse() {
        let err = "ROOT".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("unknown role 'ROOT'"));
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Operator).unwrap(), "\"OPERATOR\"");
        assert_eq!(serde_json::from_str::<Role>("\"ADMIN\"").unwrap(), Role::Admin);
        assert!(serde_json::from_str::<Role>("\"SUPERUSER\"").is_err());
    }
}

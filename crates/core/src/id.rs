//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Surrogate identifier of a stored user record.
///
/// Assigned by whatever persists users. There is no constructor that mints a
/// fresh one: a `UserId` only comes from an existing UUID or its text form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("UserId: {e}")))?;
        Ok(Self(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "0190a6f2-1c3b-7d4e-8f00-123456789abc";

    #[test]
    fn parses_and_displays_uuid() {
        let id: UserId = RAW.parse().unwrap();
        assert_eq!(id.to_string(), RAW);
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{RAW}\""));
    }

    #[test]
    fn converts_to_and_from_uuid() {
        let uuid = Uuid::parse_str(RAW).unwrap();
        let id = UserId::from(uuid);
        assert_eq!(Uuid::from(id), uuid);
        assert_eq!(id, RAW.parse::<UserId>().unwrap());
    }

    #[test]
    fn rejects_malformed_uuid() {
        let err = "not-a-uuid".parse::<UserId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.starts_with("UserId:")));
    }
}

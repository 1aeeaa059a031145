use credguard_core::ValueObject;

use crate::{Role, Username};

/// The fact that one principal holds one role.
///
/// Grants are plain values keyed by `(role, principal)`; they hold no reference
/// back to the user record, so equality and set membership are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grant {
    role: Role,
    principal: Username,
}

impl Grant {
    pub(crate) fn new(role: Role, principal: Username) -> Self {
        Self { role, principal }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn principal(&self) -> &Username {
        &self.principal
    }

    /// Authority string handed to authorization layers (the role's wire name).
    pub fn authority(&self) -> &'static str {
        self.role.as_str()
    }
}

impl ValueObject for Grant {}

impl core::fmt::Display for Grant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}@{}", self.role, self.principal)
    }
}

use thiserror::Error;
use tracing::debug;

use crate::{PrincipalDetails, Role};

/// Why a principal may not authenticate right now.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatusError {
    #[error("account is locked")]
    Locked,

    #[error("account is disabled")]
    Disabled,

    #[error("account has expired")]
    AccountExpired,

    #[error("credentials have expired")]
    CredentialsExpired,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing role '{0}'")]
    Forbidden(Role),
}

/// Pre-authentication gate over the four account-state predicates.
///
/// Reports the first failing state, checked in the order locked, disabled,
/// expired, credentials expired. Credential verification happens elsewhere.
pub fn check_account_status<P>(principal: &P) -> Result<(), AccountStatusError>
where
    P: PrincipalDetails + ?Sized,
{
    let result = if !principal.is_account_unlocked() {
        Err(AccountStatusError::Locked)
    } else if !principal.is_account_enabled() {
        Err(AccountStatusError::Disabled)
    } else if !principal.is_account_active() {
        Err(AccountStatusError::AccountExpired)
    } else if !principal.is_credential_active() {
        Err(AccountStatusError::CredentialsExpired)
    } else {
        Ok(())
    };

    if let Err(err) = &result {
        debug!(username = %principal.username(), reason = %err, "account status check failed");
    }
    result
}

/// Require that `principal` holds `role`.
///
/// - No IO
/// - No panics
pub fn require_role<P>(principal: &P, role: Role) -> Result<(), AuthzError>
where
    P: PrincipalDetails + ?Sized,
{
    if principal.has_role(role) {
        Ok(())
    } else {
        debug!(username = %principal.username(), %role, "role requirement not met");
        Err(AuthzError::Forbidden(role))
    }
}

//! `credguard-auth` — user identities with role-derived grants.
//!
//! This crate is intentionally decoupled from HTTP, hashing and storage: it
//! models the principal record an authentication layer consumes, nothing more.

pub mod authorize;
pub mod grant;
pub mod principal;
pub mod roles;
pub mod user;

pub use authorize::{AccountStatusError, AuthzError, check_account_status, require_role};
pub use grant::Grant;
pub use principal::{Credential, PrincipalDetails, Username};
pub use roles::Role;
pub use user::User;

//! User principal record (identity + account state + role grants).
//!
//! The record is a plain value: no IO, no clock, no locking. Callers that share
//! one across requests are expected to hand out snapshots rather than a single
//! mutable instance.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use credguard_core::{Entity, UserId};

use crate::{Credential, Grant, PrincipalDetails, Role, Username};

/// A principal and the grants it holds.
///
/// # Invariants
/// - At most one grant per role.
/// - Every grant is scoped to this user's current username.
/// - Credentials never leave the process through `Serialize`.
/// - The `roles` seen by serializers is computed from the grants, never stored.
///
/// Equality covers identity, account state and grants; credentials are left out.
#[derive(Debug, Clone)]
pub struct User {
    /// Surrogate key, set by whichever store persisted the record.
    pub id: Option<UserId>,
    /// `None` means the account never expires. Informational only: nothing here
    /// flips `account_expired` when the instant passes.
    pub expires_at: Option<DateTime<Utc>>,
    pub account_expired: bool,
    pub account_locked: bool,
    pub credentials_expired: bool,
    pub account_disabled: bool,
    username: Username,
    credential: Option<Credential>,
    pending_credential: Option<Credential>,
    grants: HashSet<Grant>,
}

impl User {
    pub fn new(username: Username) -> Self {
        Self {
            id: None,
            expires_at: None,
            account_expired: false,
            account_locked: false,
            credentials_expired: false,
            account_disabled: false,
            username,
            credential: None,
            pending_credential: None,
            grants: HashSet::new(),
        }
    }

    pub fn with_credential(username: Username, credential: Credential) -> Self {
        Self {
            credential: Some(credential),
            ..Self::new(username)
        }
    }

    pub fn with_expiry(username: Username, expires_at: DateTime<Utc>) -> Self {
        Self {
            expires_at: Some(expires_at),
            ..Self::new(username)
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Rename the principal, re-scoping every grant to the new name.
    pub fn set_username(&mut self, username: Username) {
        if username == self.username {
            return;
        }
        debug!(from = %self.username, to = %username, "username changed");
        self.grants = self
            .grants
            .iter()
            .map(|grant| grant.role().grant_for(&username))
            .collect();
        self.username = username;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Credentials
    // ─────────────────────────────────────────────────────────────────────────

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    /// Secret staged by a rotation workflow, not yet in effect.
    pub fn pending_credential(&self) -> Option<&Credential> {
        self.pending_credential.as_ref()
    }

    pub fn set_pending_credential(&mut self, credential: Credential) {
        self.pending_credential = Some(credential);
    }

    /// Remove and return the staged secret; committing it is the caller's job.
    pub fn take_pending_credential(&mut self) -> Option<Credential> {
        self.pending_credential.take()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Roles
    // ─────────────────────────────────────────────────────────────────────────

    /// Ensure `role` is held. Granting a held role is a no-op.
    pub fn grant_role(&mut self, role: Role) {
        if self.grants.insert(role.grant_for(&self.username)) {
            debug!(username = %self.username, %role, "role granted");
        }
    }

    /// Drop `role` if held.
    pub fn revoke_role(&mut self, role: Role) {
        if self.grants.remove(&role.grant_for(&self.username)) {
            debug!(username = %self.username, %role, "role revoked");
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.grants.contains(&role.grant_for(&self.username))
    }

    /// Roles currently held, projected from the grant set.
    pub fn effective_roles(&self) -> BTreeSet<Role> {
        self.grants.iter().map(Grant::role).collect()
    }

    pub fn grants(&self) -> impl Iterator<Item = &Grant> {
        self.grants.iter()
    }

    /// Grant every role in `roles`.
    ///
    /// Add-only: roles already held but missing from `roles` are kept. Use
    /// [`User::replace_roles`] when the input is the complete membership.
    pub fn set_roles(&mut self, roles: impl IntoIterator<Item = Role>) {
        for role in roles {
            self.grant_role(role);
        }
    }

    /// Make `roles` the exact membership, revoking anything not listed.
    pub fn replace_roles(&mut self, roles: impl IntoIterator<Item = Role>) {
        let wanted: BTreeSet<Role> = roles.into_iter().collect();
        for held in self.effective_roles() {
            if !wanted.contains(&held) {
                self.revoke_role(held);
            }
        }
        self.set_roles(wanted);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Account state
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_account_active(&self) -> bool {
        !self.account_expired
    }

    pub fn is_account_unlocked(&self) -> bool {
        !self.account_locked
    }

    pub fn is_credential_active(&self) -> bool {
        !self.credentials_expired
    }

    pub fn is_account_enabled(&self) -> bool {
        !self.account_disabled
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.username == other.username
            && self.expires_at == other.expires_at
            && self.account_expired == other.account_expired
            && self.account_locked == other.account_locked
            && self.credentials_expired == other.credentials_expired
            && self.account_disabled == other.account_disabled
            && self.grants == other.grants
    }
}

impl Eq for User {}

impl Entity for User {
    type Id = Username;

    fn id(&self) -> &Self::Id {
        &self.username
    }
}

impl PrincipalDetails for User {
    fn username(&self) -> &Username {
        User::username(self)
    }

    fn credential(&self) -> Option<&Credential> {
        User::credential(self)
    }

    fn is_account_active(&self) -> bool {
        User::is_account_active(self)
    }

    fn is_account_unlocked(&self) -> bool {
        User::is_account_unlocked(self)
    }

    fn is_credential_active(&self) -> bool {
        User::is_credential_active(self)
    }

    fn is_account_enabled(&self) -> bool {
        User::is_account_enabled(self)
    }

    fn has_role(&self, role: Role) -> bool {
        User::has_role(self, role)
    }
}

impl core::fmt::Display for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "User: {}", self.username)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serialization boundary
// ─────────────────────────────────────────────────────────────────────────────

/// Outbound shape: no secrets, roles instead of raw grants.
#[derive(Serialize)]
struct UserView<'a> {
    id: Option<UserId>,
    username: &'a Username,
    expires_at: Option<DateTime<Utc>>,
    account_expired: bool,
    account_locked: bool,
    credentials_expired: bool,
    account_disabled: bool,
    roles: BTreeSet<Role>,
}

/// Inbound shape: secrets may be supplied, roles are re-granted on load.
#[derive(Deserialize)]
struct UserRecord {
    id: Option<UserId>,
    username: Username,
    credential: Option<Credential>,
    pending_credential: Option<Credential>,
    expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    account_expired: bool,
    #[serde(default)]
    account_locked: bool,
    #[serde(default)]
    credentials_expired: bool,
    #[serde(default)]
    account_disabled: bool,
    #[serde(default)]
    roles: BTreeSet<Role>,
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        UserView {
            id: self.id,
            username: &self.username,
            expires_at: self.expires_at,
            account_expired: self.account_expired,
            account_locked: self.account_locked,
            credentials_expired: self.credentials_expired,
            account_disabled: self.account_disabled,
            roles: self.effective_roles(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        UserRecord::deserialize(deserializer).map(User::from)
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        let mut user = User {
            id: record.id,
            expires_at: record.expires_at,
            account_expired: record.account_expired,
            account_locked: record.account_locked,
            credentials_expired: record.credentials_expired,
            account_disabled: record.account_disabled,
            credential: record.credential,
            pending_credential: record.pending_credential,
            ..User::new(record.username)
        };
        user.set_roles(record.roles);
        user
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

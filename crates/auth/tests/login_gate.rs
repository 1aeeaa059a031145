//! Black-box checks of the principal record as a login flow consumes it.

use std::collections::BTreeSet;

use anyhow::Result;
use credguard_auth::{
    AccountStatusError, Credential, PrincipalDetails, Role, User, Username, check_account_status,
    require_role,
};

fn admin_candidate() -> Result<User> {
    let mut user = User::with_credential(Username::new("alice")?, Credential::new("hunter2"));
    user.grant_role(Role::Admin);
    Ok(user)
}

#[test]
fn stored_record_loads_into_a_usable_principal() -> Result<()> {
    credguard_observability::init();

    let stored = serde_json::to_string(&admin_candidate()?)?;
    assert!(!stored.contains("hunter2"));

    let loaded: User = serde_json::from_str(&stored)?;
    let details: &dyn PrincipalDetails = &loaded;

    assert_eq!(details.username().as_str(), "alice");
    assert!(details.credential().is_none());
    check_account_status(details)?;
    require_role(details, Role::Admin)?;
    Ok(())
}

#[test]
fn locked_admin_is_refused_before_role_check() -> Result<()> {
    credguard_observability::init();

    let mut user = admin_candidate()?;
    user.account_locked = true;

    assert_eq!(check_account_status(&user), Err(AccountStatusError::Locked));
    assert!(require_role(&user, Role::Admin).is_ok());
    Ok(())
}

#[test]
fn admin_workflow_replaces_membership() -> Result<()> {
    let mut user = admin_candidate()?;
    user.set_roles([Role::Operator]);
    assert_eq!(user.effective_roles(), BTreeSet::from([Role::Admin, Role::Operator]));

    user.replace_roles([Role::User]);
    assert_eq!(user.effective_roles(), BTreeSet::from([Role::User]));
    Ok(())
}

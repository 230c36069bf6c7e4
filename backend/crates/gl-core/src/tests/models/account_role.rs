use crate::{AccountRole, CoreError, Route};

use std::str::FromStr;

#[test]
fn test_account_role_as_str() {
    assert_eq!(AccountRole::Volunteer.as_str(), "volunteer");
    assert_eq!(AccountRole::Store.as_str(), "store");
}

#[test]
fn test_account_role_from_str() {
    assert_eq!(
        AccountRole::from_str("volunteer").unwrap(),
        AccountRole::Volunteer
    );
    assert_eq!(AccountRole::from_str(" Store ").unwrap(), AccountRole::Store);
    assert!(matches!(
        AccountRole::from_str("admin"),
        Err(CoreError::InvalidAccountRole { .. })
    ));
}

#[test]
fn test_account_role_dashboard_and_collection() {
    assert_eq!(AccountRole::Volunteer.dashboard(), Route::VolunteerDashboard);
    assert_eq!(AccountRole::Store.dashboard(), Route::StoreDashboard);
    assert_eq!(AccountRole::Volunteer.default_collection(), "volunteers");
    assert_eq!(AccountRole::Store.default_collection(), "stores");
}

#[test]
fn test_route_paths() {
    assert_eq!(Route::Home.path(), "/");
    assert_eq!(Route::StoreDashboard.to_string(), "/store-dashboard");
    assert_eq!(Route::VolunteerDashboard.path(), "/volunteer-dashboard");
}

#[test]
fn test_account_role_serde_snake_case() {
    let json = serde_json::to_string(&AccountRole::Volunteer).unwrap();
    assert_eq!(json, "\"volunteer\"");
}

use crate::Credentials;

#[test]
fn test_credentials_debug_redacts_password() {
    let credentials = Credentials::new("alice@example.com", "hunter22");

    let debug = format!("{credentials:?}");

    assert!(!debug.contains("hunter22"));
    assert!(!debug.contains("alice@example.com"));
    assert!(debug.contains("a***@example.com"));
}

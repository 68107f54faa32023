use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  kari@stud.noroff.no ", "secret123"),
        Ok(("kari@stud.noroff.no".to_owned(), "secret123".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret123"), Err("Please enter both email and password."));
    assert_eq!(validate_login_input("kari@stud.noroff.no", ""), Err("Please enter both email and password."));
}

#[test]
fn managers_land_on_dashboard() {
    assert_eq!(landing_path(Role::Manager), "/dashboard");
    assert_eq!(landing_path(Role::Customer), "/profile");
}

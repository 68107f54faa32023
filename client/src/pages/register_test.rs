use super::*;

fn form(email: &str, password: &str) -> RegisterForm {
    RegisterForm { name: "Kari".into(), email: email.into(), password: password.into(), venue_manager: true }
}

#[test]
fn accepts_student_and_staff_domains() {
    assert!(is_allowed_email("kari@stud.noroff.no"));
    assert!(is_allowed_email("ola@noroff.no"));
    assert!(!is_allowed_email("kari@gmail.com"));
    assert!(!is_allowed_email("kari@noroff.no.evil.com"));
}

#[test]
fn foreign_domain_is_blocked_before_any_request() {
    assert_eq!(
        form("kari@gmail.com", "longenough").validate(),
        Err("Email must end with @stud.noroff.no or @noroff.no")
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(form("kari@stud.noroff.no", "short").validate(), Err("Password must be at least 8 characters."));
}

#[test]
fn missing_name_is_rejected() {
    let mut f = form("kari@stud.noroff.no", "longenough");
    f.name = "  ".into();
    assert_eq!(f.validate(), Err("Please fill in all fields."));
}

#[test]
fn valid_form_builds_request() {
    let request = form(" kari@stud.noroff.no ", "longenough").validate().unwrap();
    assert_eq!(request.email, "kari@stud.noroff.no");
    assert_eq!(request.name, "Kari");
    assert!(request.venue_manager);
}

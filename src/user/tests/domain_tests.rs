//! Domain-focused tests for user identity and role values.

use crate::user::domain::{EmailAddress, ParseRoleError, Role, User, UserDomainError, UserName};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn email_address_normalizes_case_and_whitespace() {
    let email = EmailAddress::new("  Obra.Admin@Example.COM ").expect("valid email");
    assert_eq!(email.as_str(), "obra.admin@example.com");
}

#[rstest]
#[case("missing-at-sign.com")]
#[case("@no-local.example.com")]
#[case("no-domain@")]
#[case("no-dot@domain")]
#[case("spaces in@example.com")]
#[case("two@@example.com")]
fn email_address_rejects_malformed_values(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(UserDomainError::InvalidEmail(raw.to_owned()))
    );
}

#[rstest]
fn user_name_rejects_blank_values() {
    assert_eq!(UserName::new("   "), Err(UserDomainError::EmptyName));
}

#[rstest]
#[case("ADMIN", Role::Admin)]
#[case("worker", Role::Worker)]
#[case("  Admin  ", Role::Admin)]
fn role_parses_case_insensitively(#[case] raw: &str, #[case] expected: Role) {
    assert_eq!(Role::try_from(raw), Ok(expected));
}

#[rstest]
fn role_rejects_unknown_values() {
    assert_eq!(
        Role::try_from("SUPERVISOR"),
        Err(ParseRoleError("SUPERVISOR".to_owned()))
    );
}

#[rstest]
fn new_user_carries_validated_fields(clock: DefaultClock) {
    let user =
        User::new("Ana Torres", "ana@example.com", Role::Worker, &clock).expect("valid user");

    assert_eq!(user.name().as_str(), "Ana Torres");
    assert_eq!(user.email().as_str(), "ana@example.com");
    assert_eq!(user.role(), Role::Worker);
    assert!(!user.role().is_admin());
}

#[rstest]
fn rename_rejects_blank_names(clock: DefaultClock) {
    let mut user =
        User::new("Ana Torres", "ana@example.com", Role::Worker, &clock).expect("valid user");
    assert_eq!(user.rename(""), Err(UserDomainError::EmptyName));
    assert_eq!(user.name().as_str(), "Ana Torres");
}

#[rstest]
fn role_serializes_to_screaming_snake_case() {
    let serialized = serde_json::to_string(&Role::Admin).expect("role serializes");
    assert_eq!(serialized, "\"ADMIN\"");
}

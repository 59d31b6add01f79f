use super::*;

fn valid_registration() -> RegisterRequest {
    RegisterRequest {
        user_type: UserType::Bidder,
        company_name: "Acme Supplies".to_owned(),
        email: "ops@acme.co.ke".to_owned(),
        contact_number: "0712345678".to_owned(),
        company_type: "Limited".to_owned(),
        sector: "Construction".to_owned(),
        kra_pin: String::new(),
        location: "Nairobi".to_owned(),
        industries: vec!["Roads".to_owned()],
        password: "longenough".to_owned(),
        confirm_password: "longenough".to_owned(),
    }
}

// =============================================================
// Primitive checks
// =============================================================

#[test]
fn email_check_accepts_common_addresses() {
    assert!(is_valid_email("steve@nene.com"));
    assert!(is_valid_email(" ops@acme.co.ke "));
}

#[test]
fn email_check_rejects_malformed_addresses() {
    for raw in ["", "steve", "steve@", "@nene.com", "steve@nene", "steve@.com", "steve@nene.", "st eve@nene.com"] {
        assert!(!is_valid_email(raw), "{raw}");
    }
}

#[test]
fn strong_password_needs_every_class() {
    assert!(is_strong_password("Passw0rd!"));
    assert!(!is_strong_password("password1!"));
    assert!(!is_strong_password("PASSWORD1!"));
    assert!(!is_strong_password("Password!!"));
    assert!(!is_strong_password("Password12"));
    assert!(!is_strong_password("Pa0!"));
}

#[test]
fn strong_password_rejects_other_symbols() {
    assert!(!is_strong_password("Passw0rd!#"));
}

#[test]
fn contact_number_format() {
    assert!(is_valid_contact_number("0712345678"));
    assert!(is_valid_contact_number("0112345678"));
    assert!(!is_valid_contact_number("0812345678"));
    assert!(!is_valid_contact_number("071234567"));
    assert!(!is_valid_contact_number("07123456789"));
    assert!(!is_valid_contact_number("07l2345678"));
}

#[test]
fn kra_pin_format() {
    assert!(is_valid_kra_pin("P123456789A"));
    assert!(is_valid_kra_pin("A123456789Z"));
    assert!(is_valid_kra_pin("P123456789b"));
    assert!(!is_valid_kra_pin("B123456789Z"));
    assert!(!is_valid_kra_pin("A12345678Z"));
    assert!(!is_valid_kra_pin("A1234567890"));
}

// =============================================================
// Login / forgot
// =============================================================

#[test]
fn login_accepts_valid_input() {
    assert!(validate_login("a@b.co", "secret").is_empty());
}

#[test]
fn login_reports_both_fields() {
    let errors = validate_login("nope", "12345");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("email"), Some(INVALID_EMAIL));
    assert_eq!(errors.get("password"), Some(LOGIN_PASSWORD_TOO_SHORT));
}

#[test]
fn forgot_requires_email() {
    assert_eq!(validate_forgot("").get("email"), Some(INVALID_EMAIL));
    assert!(validate_forgot("a@b.co").is_empty());
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_accepts_matching_strong_password() {
    assert!(validate_reset("Passw0rd!", "Passw0rd!").is_empty());
}

#[test]
fn reset_short_password_reports_length_first() {
    assert_eq!(validate_reset("Pa0!", "Pa0!").get("password"), Some(RESET_PASSWORD_TOO_SHORT));
}

#[test]
fn reset_weak_password_reports_strength() {
    assert_eq!(validate_reset("password", "password").get("password"), Some(RESET_PASSWORD_WEAK));
}

#[test]
fn reset_confirmation_errors() {
    assert_eq!(validate_reset("Passw0rd!", "").get("confirm_password"), Some(CONFIRM_MISSING));
    assert_eq!(validate_reset("Passw0rd!", "Passw0rd?").get("confirm_password"), Some(RESET_MISMATCH));
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_accepts_valid_bidder() {
    assert!(validate_register(&valid_registration()).is_empty());
}

#[test]
fn register_bidder_does_not_need_kra_pin() {
    let form = RegisterRequest { kra_pin: "garbage".to_owned(), ..valid_registration() };
    assert!(validate_register(&form).get("kra_pin").is_none());
}

#[test]
fn register_tenderer_requires_kra_pin() {
    let form = RegisterRequest { user_type: UserType::Tenderer, ..valid_registration() };
    assert_eq!(validate_register(&form).get("kra_pin"), Some("KRA PIN is required for Tenderers"));
}

#[test]
fn register_tenderer_kra_pin_format() {
    let bad = RegisterRequest { user_type: UserType::Tenderer, kra_pin: "X1".to_owned(), ..valid_registration() };
    assert_eq!(validate_register(&bad).get("kra_pin"), Some("Invalid KRA PIN format. e.g AP123456789A"));

    let good =
        RegisterRequest { user_type: UserType::Tenderer, kra_pin: "P051234567Q".to_owned(), ..valid_registration() };
    assert!(validate_register(&good).is_empty());
}

#[test]
fn register_reports_each_missing_field() {
    let form = RegisterRequest {
        company_name: " ".to_owned(),
        email: "x".to_owned(),
        contact_number: "123".to_owned(),
        sector: String::new(),
        location: String::new(),
        industries: vec![String::new()],
        password: "short".to_owned(),
        confirm_password: "other".to_owned(),
        ..valid_registration()
    };
    let errors = validate_register(&form);
    for field in
        ["company_name", "email", "contact_number", "sector", "location", "industries", "password", "confirm_password"]
    {
        assert!(errors.get(field).is_some(), "{field}");
    }
}

// =============================================================
// Contact
// =============================================================

#[test]
fn contact_requires_all_fields() {
    let errors = validate_contact(&ContactRequest::default());
    assert_eq!(errors.len(), 4);
}

#[test]
fn contact_accepts_complete_message() {
    let form = ContactRequest {
        name: "Jane".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: "Tender question".to_owned(),
        message: "When does the roads tender close?".to_owned(),
    };
    assert!(validate_contact(&form).is_empty());
}

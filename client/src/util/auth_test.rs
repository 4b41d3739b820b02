use super::*;

fn login(email: &str, password: &str) -> Credentials {
    Credentials::Login {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// MockAuthProvider
// =============================================================

#[test]
fn login_keeps_email_and_fabricates_names() {
    let user = MockAuthProvider.authenticate(&login("x@y.com", "anything")).unwrap();
    assert_eq!(user.email, "x@y.com");
    assert_eq!(user.id, MockAuthProvider::LOGIN_USER_ID);
    assert_eq!(user.first_name.as_deref(), Some("Иван"));
    assert_eq!(user.last_name.as_deref(), Some("Петров"));
}

#[test]
fn login_ignores_password() {
    let a = MockAuthProvider.authenticate(&login("x@y.com", "one")).unwrap();
    let b = MockAuthProvider.authenticate(&login("x@y.com", "two")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn register_uses_entered_names() {
    let credentials = Credentials::Register {
        first_name: "Анна".to_owned(),
        last_name: "Смирнова".to_owned(),
        email: "anna@example.com".to_owned(),
        password: "secret".to_owned(),
    };
    let user = MockAuthProvider.authenticate(&credentials).unwrap();
    assert_eq!(user.id, MockAuthProvider::REGISTER_USER_ID);
    assert_eq!(user.email, "anna@example.com");
    assert_eq!(user.first_name.as_deref(), Some("Анна"));
    assert_eq!(user.last_name.as_deref(), Some("Смирнова"));
    assert_eq!(user.short_name(), "Анна");
    assert!(user.phone.is_none());
}

// =============================================================
// AuthService
// =============================================================

struct RejectingProvider;

impl AuthProvider for RejectingProvider {
    fn authenticate(&self, _credentials: &Credentials) -> Result<User, AuthError> {
        Err(AuthError::Rejected {
            message: "nope".to_owned(),
        })
    }
}

#[test]
fn service_defaults_to_mock_provider() {
    let user = AuthService::default().authenticate(&login("a@b.com", "p")).unwrap();
    assert_eq!(user.email, "a@b.com");
}

#[test]
fn service_propagates_provider_errors() {
    let service = AuthService::new(RejectingProvider);
    let err = service.authenticate(&login("a@b.com", "p")).unwrap_err();
    assert_eq!(err.to_string(), "учётные данные отклонены: nope");
}

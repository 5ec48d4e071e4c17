//! Use case and router tests against the in-memory credential store

#[cfg(test)]
mod register_tests {
    use std::sync::Arc;

    use crate::application::{IdentityConfig, RegisterInput, RegisterUseCase};
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{email::Email, user_name::UserName};
    use crate::error::IdentityError;
    use crate::infra::memory::InMemoryIdentityRepository;

    fn use_case(repo: &InMemoryIdentityRepository) -> RegisterUseCase<InMemoryIdentityRepository> {
        RegisterUseCase::new(
            Arc::new(repo.clone()),
            Arc::new(IdentityConfig::with_secret([1u8; 32])),
        )
    }

    fn input(user_name: &str, email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            user_name: user_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_returns_public_fields() {
        let repo = InMemoryIdentityRepository::new();
        let output = use_case(&repo)
            .execute(input("alice", "Alice@Example.com", "pw1"))
            .await
            .unwrap();

        assert_eq!(output.user_name, "alice");
        assert_eq!(output.email, "alice@example.com");

        let stored = repo
            .find_by_user_name(&UserName::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.user_id, output.user_id);
        assert_ne!(stored.password_hash.as_str(), "pw1");
    }

    #[tokio::test]
    async fn test_duplicate_user_name_rejected() {
        let repo = InMemoryIdentityRepository::new();
        let use_case = use_case(&repo);
        use_case
            .execute(input("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        let result = use_case.execute(input("alice", "other@x.com", "pw2")).await;

        assert!(matches!(result, Err(IdentityError::DuplicateCredential)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_case_insensitively() {
        let repo = InMemoryIdentityRepository::new();
        let use_case = use_case(&repo);
        use_case
            .execute(input("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        let result = use_case.execute(input("bob", "A@X.COM", "pw2")).await;

        assert!(matches!(result, Err(IdentityError::DuplicateCredential)));
        assert!(
            repo.find_by_email(&Email::new("a@x.com").unwrap())
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_concurrent_registration_admits_one() {
        let repo = InMemoryIdentityRepository::new();
        let first = use_case(&repo);
        let second = use_case(&repo);

        let (a, b) = tokio::join!(
            first.execute(input("alice", "a@x.com", "pw1")),
            second.execute(input("alice", "b@x.com", "pw1")),
        );

        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_blank_fields_are_validation_errors() {
        let repo = InMemoryIdentityRepository::new();
        let use_case = use_case(&repo);

        for bad in [
            input("", "a@x.com", "pw1"),
            input("alice", "  ", "pw1"),
            input("alice", "a@x.com", ""),
            input("al ice", "a@x.com", "pw1"),
            input("alice", "not-an-email", "pw1"),
        ] {
            let result = use_case.execute(bad).await;
            assert!(matches!(result, Err(IdentityError::Validation(_))));
        }
        assert!(repo.is_empty().await);
    }
}

#[cfg(test)]
mod authenticate_tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use tokio_test::{assert_err, assert_ok};

    use crate::application::{
        AuthenticateInput, AuthenticateUseCase, IdentityConfig, RegisterInput, RegisterUseCase,
        ResolveUserIdUseCase, VerifyTokenUseCase,
    };
    use crate::error::IdentityError;
    use crate::infra::memory::InMemoryIdentityRepository;

    struct Fixture {
        repo: Arc<InMemoryIdentityRepository>,
        config: Arc<IdentityConfig>,
    }

    async fn fixture_with(config: IdentityConfig) -> Fixture {
        let repo = Arc::new(InMemoryIdentityRepository::new());
        let config = Arc::new(config);
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(RegisterInput {
                user_name: "alice".to_string(),
                email: "a@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();
        Fixture { repo, config }
    }

    async fn fixture() -> Fixture {
        fixture_with(IdentityConfig::with_secret([2u8; 32])).await
    }

    fn login(email: &str, password: &str) -> AuthenticateInput {
        AuthenticateInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let f = fixture().await;
        let output = AuthenticateUseCase::new(f.repo.clone(), f.config.clone())
            .execute(login("a@x.com", "pw1"))
            .await
            .unwrap();

        let verified = VerifyTokenUseCase::new(f.config.clone())
            .execute(&output.token)
            .unwrap();

        assert_eq!(verified.user_id, output.user_id);
        assert_eq!(verified.user_name, "alice");
        assert!(output.expires_at > Utc::now() + Duration::minutes(59));
        assert!(output.expires_at <= Utc::now() + Duration::hours(1));
    }

    #[tokio::test]
    async fn test_token_rejected_after_expiry() {
        let f = fixture().await;
        let output = AuthenticateUseCase::new(f.repo.clone(), f.config.clone())
            .execute(login("a@x.com", "pw1"))
            .await
            .unwrap();
        let verify = VerifyTokenUseCase::new(f.config.clone());

        assert_ok!(verify.execute_at(&output.token, output.expires_at - Duration::seconds(1)));
        assert_err!(verify.execute_at(&output.token, output.expires_at));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let f = fixture().await;
        let result = AuthenticateUseCase::new(f.repo.clone(), f.config.clone())
            .execute(login("  A@X.com ", "pw1"))
            .await;
        assert_ok!(result);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credential() {
        let f = fixture().await;
        let use_case = AuthenticateUseCase::new(f.repo.clone(), f.config.clone());

        for password in ["pw2", "PW1", "pw1 x", ""] {
            let result = use_case.execute(login("a@x.com", password)).await;
            assert!(matches!(result, Err(IdentityError::InvalidCredential)));
        }
    }

    #[tokio::test]
    async fn test_compatibility_equivalent_password_is_rejected() {
        let f = fixture().await;
        let use_case = AuthenticateUseCase::new(f.repo.clone(), f.config.clone());

        for password in ["ｐｗ１", "pｗ1", "pw¹"] {
            let result = use_case.execute(login("a@x.com", password)).await;
            assert!(
                matches!(result, Err(IdentityError::InvalidCredential)),
                "{password} must not match pw1"
            );
        }
        assert_ok!(use_case.execute(login("a@x.com", "pw1")).await);
    }

    #[tokio::test]
    async fn test_unknown_email_is_user_not_found() {
        let f = fixture().await;
        let use_case = AuthenticateUseCase::new(f.repo.clone(), f.config.clone());

        for email in ["nobody@x.com", "not-an-email", ""] {
            let result = use_case.execute(login(email, "pw1")).await;
            assert!(matches!(result, Err(IdentityError::UserNotFound)), "{email}");
        }
    }

    #[tokio::test]
    async fn test_pepper_must_match() {
        let f = fixture_with(IdentityConfig::with_secret([2u8; 32]).with_pepper("pepper")).await;

        assert_ok!(
            AuthenticateUseCase::new(f.repo.clone(), f.config.clone())
                .execute(login("a@x.com", "pw1"))
                .await
        );

        let unpeppered = Arc::new(IdentityConfig::with_secret([2u8; 32]));
        let result = AuthenticateUseCase::new(f.repo.clone(), unpeppered)
            .execute(login("a@x.com", "pw1"))
            .await;
        assert!(matches!(result, Err(IdentityError::InvalidCredential)));
    }

    #[tokio::test]
    async fn test_resolve_user_id() {
        let f = fixture().await;
        let output = AuthenticateUseCase::new(f.repo.clone(), f.config.clone())
            .execute(login("a@x.com", "pw1"))
            .await
            .unwrap();
        let resolve = ResolveUserIdUseCase::new(f.repo.clone());

        assert_eq!(resolve.execute("alice").await.unwrap(), output.user_id);
        assert!(matches!(
            resolve.execute("bob").await,
            Err(IdentityError::UserNotFound)
        ));
        assert!(matches!(
            resolve.execute("not/a/name").await,
            Err(IdentityError::UserNotFound)
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::IdentityConfig;
    use crate::infra::memory::InMemoryIdentityRepository;
    use crate::presentation::router::identity_router_generic;

    fn app() -> Router {
        identity_router_generic(
            InMemoryIdentityRepository::new(),
            Arc::new(IdentityConfig::with_secret([5u8; 32])),
        )
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn alice() -> Value {
        json!({ "userName": "alice", "email": "a@x.com", "password": "pw1" })
    }

    #[tokio::test]
    async fn test_register_login_userinfo() {
        let app = app();

        let (status, body) = send(&app, post_json("/register", alice())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["userName"], "alice");
        assert_eq!(body["email"], "a@x.com");
        assert!(body.get("password").is_none());
        let user_id = body["userId"].clone();

        let (status, body) = send(
            &app,
            post_json("/login", json!({ "email": "a@x.com", "password": "pw1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tokenType"], "Bearer");
        let token = body["token"].as_str().unwrap().to_string();

        let req = Request::builder()
            .uri("/userinfo")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["userId"], user_id);
        assert_eq!(body["user"]["userName"], "alice");
    }

    #[tokio::test]
    async fn test_register_twice_is_conflict() {
        let app = app();
        send(&app, post_json("/register", alice())).await;

        let (status, body) = send(&app, post_json("/register", alice())).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], 409);
    }

    #[tokio::test]
    async fn test_register_accepts_legacy_username_key() {
        let (status, body) = send(
            &app(),
            post_json(
                "/register",
                json!({ "username": "bob", "email": "b@x.com", "password": "pw" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["userName"], "bob");
    }

    #[tokio::test]
    async fn test_register_missing_field_is_bad_request() {
        let (status, _) = send(
            &app(),
            post_json("/register", json!({ "userName": "alice", "password": "pw1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_failures() {
        let app = app();
        send(&app, post_json("/register", alice())).await;

        let (status, _) = send(
            &app,
            post_json("/login", json!({ "email": "a@x.com", "password": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            post_json("/login", json!({ "email": "z@x.com", "password": "pw1" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            post_json("/login", json!({ "email": "alice", "password": "pw1" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_userinfo_rejects_missing_and_bad_tokens() {
        let app = app();

        let missing = Request::builder()
            .uri("/userinfo")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, missing).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        for value in ["Bearer garbage", "Bearer a.b", "Basic YWxpY2U6cHcx"] {
            let req = Request::builder()
                .uri("/userinfo")
                .header(header::AUTHORIZATION, value)
                .body(Body::empty())
                .unwrap();
            let (status, body) = send(&app, req).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{value}");
            assert_eq!(body["detail"], "Invalid token");
        }
    }
}

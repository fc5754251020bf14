//! End-to-end registration, login, and sign-out.

mod support;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::json;

use support::{PASSWORD, booknest_app, send, sign_in, sign_up};

#[actix_web::test]
async fn registered_user_round_trip() {
    let app = actix_test::init_service(booknest_app()).await;
    let cookie = sign_up(&app, "carol@example.com").await;

    let hello = send(&app, actix_test::TestRequest::get().uri("/hello"), Some(&cookie)).await;
    assert_eq!(hello.status, StatusCode::OK);
    assert_eq!(hello.body, json!("carol@example.com"));

    let info = send(
        &app,
        actix_test::TestRequest::get().uri("/manage/info"),
        Some(&cookie),
    )
    .await;
    assert_eq!(
        info.body,
        json!({"email": "carol@example.com", "isEmailConfirmed": false})
    );

    let signed_out = send(
        &app,
        actix_test::TestRequest::post().uri("/api/account/signout"),
        Some(&cookie),
    )
    .await;
    assert_eq!(signed_out.status, StatusCode::OK);
}

#[actix_web::test]
async fn login_is_case_insensitive_but_keeps_registered_casing() {
    let app = actix_test::init_service(booknest_app()).await;
    sign_up(&app, "Dave@Example.com").await;

    let cookie = sign_in(&app, "dave@example.com", PASSWORD)
        .await
        .expect("case-insensitive login");
    let hello = send(&app, actix_test::TestRequest::get().uri("/hello"), Some(&cookie)).await;
    assert_eq!(hello.body, json!("Dave@Example.com"));
}

#[actix_web::test]
async fn duplicate_registration_is_rejected() {
    let app = actix_test::init_service(booknest_app()).await;
    sign_up(&app, "erin@example.com").await;

    let again = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_json(json!({"email": "ERIN@example.com", "password": PASSWORD})),
        None,
    )
    .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.body["details"]["code"], "duplicate_user_name");
}

#[rstest]
#[case("frank@example.com", "Wr0ng!pass")]
#[case("nobody@example.com", PASSWORD)]
#[actix_web::test]
async fn bad_credentials_are_unauthorised(#[case] email: &str, #[case] password: &str) {
    let app = actix_test::init_service(booknest_app()).await;
    sign_up(&app, "frank@example.com").await;

    let result = sign_in(&app, email, password).await;
    assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
}

#[actix_web::test]
async fn weak_password_lists_every_violation() {
    let app = actix_test::init_service(booknest_app()).await;

    let reply = send(
        &app,
        actix_test::TestRequest::post()
            .uri("/register")
            .set_json(json!({"email": "gina@example.com", "password": "short"})),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let violations: Vec<&str> = reply.body["details"]["violations"]
        .as_array()
        .expect("violations")
        .iter()
        .filter_map(|code| code.as_str())
        .collect();
    assert_eq!(
        violations,
        vec![
            "password_too_short",
            "password_requires_digit",
            "password_requires_upper",
            "password_requires_non_alphanumeric"
        ]
    );
}

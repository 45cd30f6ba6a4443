//! Drive a running server through the typed client.

use bizboost_core::api::{login, signup, Error};
use bizboost_core::Client;
use bizboost_server::{notifier::Notifier, Config, State};
use clap::Parser;
use sqlx::SqlitePool;
use std::future::IntoFuture;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Keeps the most recent token for each email.
#[derive(Default)]
struct Inbox(Mutex<Vec<(String, String)>>);

impl Inbox {
    fn token_for(&self, email: &str) -> Option<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, token)| token.clone())
    }
}

impl Notifier for Inbox {
    fn send_verification(&self, email: &str, _name: &str, token: &str) -> bool {
        self.0
            .lock()
            .unwrap()
            .push((email.to_string(), token.to_string()));
        true
    }
}

/// Serve the app on an ephemeral port, returning a client pointed at it.
async fn serve(pool: SqlitePool, inbox: Arc<Inbox>) -> Client {
    serve_with_index(pool, inbox, "does-not-exist.html").await
}

/// Like `serve`, with a specific landing page.
async fn serve_with_index(pool: SqlitePool, inbox: Arc<Inbox>, index_file: &str) -> Client {
    let config = Config::parse_from(["bizboost-server", "--index-file", index_file]);
    let app = bizboost_server::app(State::new(pool, inbox), &config);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(axum::serve(listener, app).into_future());

    Client::new(format!("http://{address}"))
}

fn signup_req(name: &str, email: &str, password: &str) -> signup::Req {
    signup::Req {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn login_req(email: &str, password: &str) -> login::Req {
    login::Req {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[test_log::test(sqlx::test)]
async fn test_signup_verify_login(pool: SqlitePool) {
    let inbox = Arc::new(Inbox::default());
    let server = serve(pool, inbox.clone()).await;
    let http = reqwest::Client::new();

    let created = server
        .signup(&http, &signup_req("Amy", "amy@x.com", "pw1"))
        .await
        .unwrap();
    assert!(created.success);

    // can't log in before verifying
    match server.login(&http, &login_req("amy@x.com", "pw1")).await {
        Err(Error::Client(message)) => {
            assert_eq!(message, "Please verify your email before logging in");
        }
        other => panic!("expected a client error, got {other:?}"),
    }

    let token = inbox.token_for("amy@x.com").unwrap();
    let page = server.verify(&http, &token).await.unwrap();
    assert!(page.contains("Email Verified!"), "{page}");

    // links only work once
    match server.verify(&http, &token).await {
        Err(Error::Client(page)) => assert!(page.contains("Invalid Token"), "{page}"),
        other => panic!("expected a client error, got {other:?}"),
    }

    let logged_in = server
        .login(&http, &login_req("amy@x.com", "pw1"))
        .await
        .unwrap();
    assert!(logged_in.success);
    assert_eq!(logged_in.message, "Login successful");
    assert_eq!(logged_in.user.name, "Amy");

    match server.login(&http, &login_req("amy@x.com", "wrong")).await {
        Err(Error::Client(message)) => assert_eq!(message, "Invalid email or password"),
        other => panic!("expected a client error, got {other:?}"),
    }
}

#[test_log::test(sqlx::test)]
async fn test_duplicate_signup(pool: SqlitePool) {
    let server = serve(pool, Arc::new(Inbox::default())).await;
    let http = reqwest::Client::new();

    server
        .signup(&http, &signup_req("Amy", "amy@x.com", "pw1"))
        .await
        .unwrap();

    match server
        .signup(&http, &signup_req("Amy", "amy@x.com", "pw1"))
        .await
    {
        Err(Error::Client(message)) => {
            assert_eq!(message, "An account with this email already exists");
        }
        other => panic!("expected a client error, got {other:?}"),
    }
}

#[test_log::test(sqlx::test)]
async fn test_missing_fields(pool: SqlitePool) {
    let server = serve(pool, Arc::new(Inbox::default())).await;
    let http = reqwest::Client::new();

    // no name at all
    let resp = http
        .post(format!("{}/api/signup", server.server))
        .json(&serde_json::json!({ "email": "amy@x.com", "password": "pw1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json::<serde_json::Value>().await.unwrap(),
        serde_json::json!({ "success": false, "message": "All fields are required" })
    );

    // not JSON
    let resp = http
        .post(format!("{}/api/login", server.server))
        .body("email=amy@x.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[test_log::test(sqlx::test)]
async fn test_health_and_missing_landing_page(pool: SqlitePool) {
    let server = serve(pool, Arc::new(Inbox::default())).await;
    let http = reqwest::Client::new();

    let health = http
        .get(format!("{}/health", server.server))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);
    assert_eq!(health.text().await.unwrap(), "OK");

    let index = http.get(&server.server).send().await.unwrap();
    assert_eq!(index.status(), reqwest::StatusCode::NOT_FOUND);
}

#[test_log::test(sqlx::test)]
async fn test_landing_page(pool: SqlitePool) {
    let index_file = concat!(env!("CARGO_MANIFEST_DIR"), "/index.html");
    let server = serve_with_index(pool, Arc::new(Inbox::default()), index_file).await;
    let http = reqwest::Client::new();

    let index = http.get(&server.server).send().await.unwrap();

    assert_eq!(index.status(), reqwest::StatusCode::OK);
    assert_eq!(
        index.text().await.unwrap(),
        std::fs::read_to_string(index_file).unwrap()
    );
}

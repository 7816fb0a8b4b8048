//! End-to-end flows against a real PostgreSQL database.
//!
//! Set `EVCHARGE_TEST_DATABASE_URL` to a disposable database to run these;
//! without it every test prints a skip notice and returns early. Rows are
//! never cleaned up, so each test uses unique usernames and emails.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tokio::sync::OnceCell;
use tower::ServiceExt;
use uuid::Uuid;

use evcharge::api::routes::create_router;
use evcharge::config::DatabaseConfig;
use evcharge::db::{lazy_connection_pool, run_pending_migrations};
use evcharge::AppState;

const DATABASE_URL_ENV: &str = "EVCHARGE_TEST_DATABASE_URL";

static MIGRATED: OnceCell<()> = OnceCell::const_new();

async fn app() -> Option<Router> {
    let Ok(url) = std::env::var(DATABASE_URL_ENV) else {
        eprintln!("skipping: {} is not set", DATABASE_URL_ENV);
        return None;
    };

    MIGRATED
        .get_or_init(|| async {
            run_pending_migrations(&url).await.unwrap();
        })
        .await;

    let config = DatabaseConfig {
        url,
        max_connections: 2,
        min_connections: 1,
        connection_timeout: 5,
        auto_migrate: false,
    };
    Some(create_router(AppState::new(lazy_connection_pool(&config))))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response: Response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

struct Signup {
    username: String,
    email: String,
}

impl Signup {
    fn unique() -> Self {
        let tag = Uuid::new_v4().simple().to_string();
        Self {
            username: format!("driver_{}", &tag[..12]),
            email: format!("{}@example.com", &tag[..12]),
        }
    }

    fn body(&self) -> Value {
        json!({
            "username": self.username,
            "email": self.email,
            "password": "s3cret-pass",
            "vehicle_number": "KA01AB1234",
            "model": "Nexon EV",
            "brand": "Tata"
        })
    }
}

/// Registers a fresh user and returns their id via login.
async fn register(app: &Router) -> (Signup, i64) {
    let signup = Signup::unique();
    let (status, _) = send(app, Method::POST, "/api/signup", Some(signup.body())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/login",
        Some(json!({"email": signup.email, "password": "s3cret-pass"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["user"]["id"].as_i64().unwrap();
    (signup, id)
}

#[tokio::test]
async fn signup_then_login_returns_user_payload() {
    let Some(app) = app().await else { return };

    let (signup, id) = register(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"email": signup.email, "password": "s3cret-pass"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], id);
    assert_eq!(body["user"]["username"], signup.username);
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let Some(app) = app().await else { return };
    let (signup, _) = register(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/login",
        Some(json!({"email": signup.email, "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials.");
}

#[tokio::test]
async fn duplicate_signup_is_conflict_and_creates_nothing() {
    let Some(app) = app().await else { return };
    let (signup, id) = register(&app).await;

    let mut same_email = signup.body();
    same_email["username"] = json!(format!("{}_x", signup.username));
    let (status, body) = send(&app, Method::POST, "/api/signup", Some(same_email)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "User already exists.");

    let mut same_username = signup.body();
    same_username["email"] = json!(format!("x_{}", signup.email));
    let (status, _) = send(&app, Method::POST, "/api/signup", Some(same_username)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = send(&app, Method::GET, "/api/vehicles", None).await;
    let owned = body["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|v| v["user_id"] == id)
        .count();
    assert_eq!(owned, 1);
}

#[tokio::test]
async fn signup_missing_password_creates_nothing() {
    let Some(app) = app().await else { return };
    let signup = Signup::unique();

    let mut body = signup.body();
    body.as_object_mut().unwrap().remove("password");
    let (status, _) = send(&app, Method::POST, "/api/signup", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/api/users", None).await;
    let users = body["users"].as_array().unwrap();
    assert!(users.iter().all(|u| u["email"] != json!(signup.email)));
}

#[tokio::test]
async fn vehicle_read_and_full_overwrite() {
    let Some(app) = app().await else { return };
    let (_, id) = register(&app).await;

    let (status, body) = send(&app, Method::GET, &format!("/api/vehicle/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle"]["vehicle_number"], "KA01AB1234");
    assert_eq!(body["vehicle"]["brand"], "Tata");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/vehicle/{}", id),
        Some(json!({"vehicle_number": "KA05XY9999", "year": "2024"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle"]["vehicle_number"], "KA05XY9999");
    assert_eq!(body["vehicle"]["year"], "2024");
    assert!(body["vehicle"]["brand"].is_null());
}

#[tokio::test]
async fn updating_missing_vehicle_is_not_found() {
    let Some(app) = app().await else { return };

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/vehicle/{}", i32::MAX),
        Some(json!({"vehicle_number": "KA01AB1234"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Vehicle not found.");
}

#[tokio::test]
async fn identical_bookings_are_both_kept() {
    let Some(app) = app().await else { return };
    let (_, id) = register(&app).await;

    let booking = json!({
        "user_id": id,
        "station_id": 1,
        "station_name": "MG Road Supercharger",
        "date": "2025-03-01",
        "time": "10:00",
        "duration": "60"
    });
    for _ in 0..2 {
        let (status, body) = send(&app, Method::POST, "/api/booking", Some(booking.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Booking confirmed.");
    }

    let (status, body) = send(&app, Method::GET, &format!("/api/bookings/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookings"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn free_form_text_longer_than_old_limits_is_stored() {
    let Some(app) = app().await else { return };
    let (_, id) = register(&app).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/booking",
        Some(json!({
            "user_id": id,
            "station_id": 1,
            "station_name": "MG Road Supercharger",
            "date": "Saturday, 1 March 2025",
            "time": "10:00 in the morning, IST",
            "duration": "60"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/vehicle/{}", id),
        Some(json!({"vehicle_number": "KA05XY9999", "year": "2023 (facelift)"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle"]["year"], "2023 (facelift)");
}

#[tokio::test]
async fn overlong_username_is_bad_request() {
    let Some(app) = app().await else { return };
    let signup = Signup::unique();

    let mut body = signup.body();
    body["username"] = json!("u".repeat(300));
    let (status, _) = send(&app, Method::POST, "/api/signup", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn station_update_stamps_utc_time() {
    let Some(app) = app().await else { return };

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/stations",
        Some(json!({"name": "UTC Hub", "address": "2 Ring Road", "availableSlots": 1, "totalSlots": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["station"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/stations/{}", id),
        Some(json!({"name": "UTC Hub", "address": "2 Ring Road", "availableSlots": 0, "totalSlots": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let stamped = body["station"]["updatedAt"].as_str().unwrap().trim_end_matches('Z');
    let stamped: jiff::civil::DateTime = stamped.parse().unwrap();
    let now = jiff::Timestamp::now().to_zoned(jiff::tz::TimeZone::UTC).datetime();
    let drift = now.duration_since(stamped).as_secs().abs();
    assert!(drift < 300, "updatedAt should be UTC, drifted {}s", drift);
}

#[tokio::test]
async fn station_lifecycle_with_status_coercion() {
    let Some(app) = app().await else { return };

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/stations",
        Some(json!({
            "name": "Ring Road Hub",
            "address": "1 Ring Road",
            "availableSlots": 2,
            "totalSlots": 4,
            "status": "exploded"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["station"]["status"], "online");
    let id = body["station"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/stations/{}", id),
        Some(json!({
            "name": "Ring Road Hub",
            "address": "1 Ring Road",
            "availableSlots": 0,
            "totalSlots": 4,
            "status": "maintenance"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["station"]["status"], "maintenance");
    assert_eq!(body["station"]["availableSlots"], 0);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/stations/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/stations/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Station not found.");
}

#[tokio::test]
async fn legacy_feedback_text_is_parsed_on_listing() {
    let Some(app) = app().await else { return };
    let (_, id) = register(&app).await;
    let comment = format!("Fine {}", Uuid::new_v4());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/feedback",
        Some(json!({
            "user_id": id,
            "feedback": format!("Rating: 4, Experience: good, Comment: {}", comment)
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let feedback_id = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, "/api/feedbacks", None).await;
    assert_eq!(status, StatusCode::OK);
    let entry = body["feedbacks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["id"] == feedback_id)
        .unwrap();
    assert_eq!(entry["stars"], 4);
    assert!(entry["description"].as_str().unwrap().contains(&comment));
    assert_eq!(entry["user_id"], id);
}

#[tokio::test]
async fn users_listing_never_exposes_passwords() {
    let Some(app) = app().await else { return };
    let (signup, _) = register(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert!(users.iter().any(|u| u["email"] == json!(signup.email)));
    assert!(users.iter().all(|u| u.get("password").is_none()));
}

#[tokio::test]
async fn readiness_passes_with_database() {
    let Some(app) = app().await else { return };

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

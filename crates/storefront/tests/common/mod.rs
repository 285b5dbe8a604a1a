#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use parking_lot::Mutex;
use serde_json::{Value, json};
use shared::{config::Claims, domain::responses::UserType};
use std::{collections::HashMap, path::Path as FsPath, sync::Arc};
use storefront::{config::Config, routes::HistoryNavigator, state::AppState};
use tokio::{net::TcpListener, task::JoinHandle};

pub const PASSWORD: &str = "hemligt";
pub const ORG: &str = "556677-8899";

/// Who the stub logs in and what token it hands out.
#[derive(Debug, Clone)]
pub struct Account {
    pub user_type: UserType,
    pub is_admin: bool,
    pub ttl: Duration,
    pub organization_number: Option<String>,
}

impl Account {
    pub fn individual() -> Self {
        Self {
            user_type: UserType::Individual,
            is_admin: false,
            ttl: Duration::hours(2),
            organization_number: None,
        }
    }

    pub fn company() -> Self {
        Self {
            user_type: UserType::Company,
            organization_number: Some(ORG.into()),
            ..Self::individual()
        }
    }

    pub fn admin() -> Self {
        Self {
            is_admin: true,
            ..Self::individual()
        }
    }

    pub fn expired(mut self) -> Self {
        self.ttl = Duration::seconds(-30);
        self
    }

    pub fn token(&self) -> String {
        let now = Utc::now();
        let claims = Claims {
            subject_id: "u-42".into(),
            user_type: self.user_type,
            phone_number: "070-1234567".into(),
            is_admin: self.is_admin,
            organization_number: self.organization_number.clone(),
            issued_at: now.timestamp(),
            expires_at: (now + self.ttl).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server-only-secret"),
        )
        .unwrap()
    }

    pub fn user(&self) -> Value {
        json!({
            "id": "u-42",
            "name": "Sara Berg",
            "email": "sara@example.se",
            "phone_number": "070-1234567",
            "is_admin": self.is_admin,
            "user_type": self.user_type.as_str(),
            "organization_number": self.organization_number,
        })
    }
}

#[derive(Default)]
pub struct Recorded {
    /// `(path, Authorization header)` for every request.
    pub requests: Mutex<Vec<(String, Option<String>)>>,
    pub queries: Mutex<Vec<HashMap<String, String>>>,
    pub bodies: Mutex<Vec<Value>>,
}

impl Recorded {
    pub fn authorization_for(&self, path: &str) -> Option<String> {
        self.requests
            .lock()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .and_then(|(_, auth)| auth.clone())
    }
}

struct StubState {
    account: Account,
    recorded: Arc<Recorded>,
}

type Shared = Arc<StubState>;

fn record(state: &StubState, path: &str, headers: &HeaderMap) {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.recorded.requests.lock().push((path.to_string(), auth));
}

fn bearer(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer "))
}

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "message": text }))).into_response()
}

pub fn car(id: &str, model: &str, category: &str, location: &str, image: bool) -> Value {
    let image_url = image.then(|| format!("https://img.example.se/{id}.jpg"));
    json!({
        "_id": id,
        "organization_number": ORG,
        "model": model,
        "price_per_day": 650,
        "location": location,
        "category": category,
        "image_url": image_url,
        "availability": { "from": "2025-06-01", "to": "2025-09-01" },
        "unavailable": [],
        "created_at": "2025-05-01T10:00:00.000Z",
        "updated_at": "2025-05-01T10:00:00.000Z",
    })
}

pub fn fleet() -> Vec<Value> {
    vec![
        car("c1", "Volvo XC60", "SUV", "Göteborg", true),
        car("c2", "Polestar 2", "Elbil", "Stockholm", true),
        car("c3", "Volvo V70", "", "Malmö", false),
        car("c4", "Kia EV6", "Elbil", "Stockholm", true),
        car("c5", "Saab 9-3", "Sedan", "Trollhättan", true),
    ]
}

fn rental(id: &str, car_id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "car_id": car_id,
        "renter_id": "u-42",
        "start_date": "2025-07-01",
        "end_date": "2025-07-04",
        "status": status,
        "total_price": 1950,
    })
}

fn booking(rental_id: &str, pickup: &str, dropoff: &str) -> Value {
    json!({
        "_id": format!("b-{rental_id}"),
        "rental_id": rental_id,
        "car_id": car("c1", "Volvo XC60", "SUV", "Göteborg", true),
        "renter_id": "u-42",
        "start_date": "2025-07-01",
        "end_date": "2025-07-04",
        "total_price": 1950,
        "pickup_address": pickup,
        "dropoff_address": dropoff,
    })
}

async fn login(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, "/auth/login", &headers);
    if body["password"] != PASSWORD {
        return message(StatusCode::UNAUTHORIZED, "Fel e-post eller lösenord");
    }
    Json(json!({ "token": state.account.token(), "user": state.account.user() })).into_response()
}

async fn register(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, "/auth/register", &headers);
    state.recorded.bodies.lock().push(body.clone());
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Användare registrerad", "email": body["email"] })),
    )
        .into_response()
}

async fn list_cars(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "/cars", &headers);
    state.recorded.queries.lock().push(query.clone());
    let cars: Vec<Value> = fleet()
        .into_iter()
        .filter(|c| {
            query
                .get("organizationNumber")
                .is_none_or(|org| c["organization_number"] == org.as_str())
        })
        .collect();
    Json(cars).into_response()
}

async fn get_car(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    record(&state, "/cars/{id}", &headers);
    match fleet().into_iter().find(|c| c["_id"] == id.as_str()) {
        Some(car) => Json(car).into_response(),
        None => message(StatusCode::NOT_FOUND, "Bilen hittades inte"),
    }
}

async fn organization_cars(State(state): State<Shared>, headers: HeaderMap) -> Response {
    record(&state, "/cars/organization", &headers);
    if !bearer(&headers) {
        return message(StatusCode::UNAUTHORIZED, "Ingen token, åtkomst nekad");
    }
    Json(fleet()).into_response()
}

async fn create_car(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, "/cars#create", &headers);
    let mut created = car("c9", "", "", "", false);
    if let (Some(target), Some(fields)) = (created.as_object_mut(), body.as_object()) {
        for (k, v) in fields {
            target.insert(k.clone(), v.clone());
        }
    }
    (StatusCode::CREATED, Json(json!({ "car": created }))).into_response()
}

async fn update_car(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    record(&state, "/cars/{id}#update", &headers);
    let mut updated = car(&id, "Volvo XC60", "SUV", "Göteborg", true);
    if let Some(price) = body.get("price_per_day") {
        updated["price_per_day"] = price.clone();
    }
    Json(json!({ "car": updated })).into_response()
}

async fn delete_car(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    record(&state, "/cars/{id}#delete", &headers);
    if !state.account.is_admin && state.account.user_type != UserType::Company {
        return message(StatusCode::FORBIDDEN, "Endast företag kan ta bort bilar");
    }
    Json(json!({ "message": format!("Bil {id} borttagen") })).into_response()
}

async fn create_rental(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, "/rentals#create", &headers);
    if !bearer(&headers) {
        return message(StatusCode::UNAUTHORIZED, "Ingen token, åtkomst nekad");
    }
    state.recorded.bodies.lock().push(body.clone());
    let car_id = body["car_id"].as_str().unwrap_or_default();
    let mut created = rental("r-new", car_id, "pending");
    created["start_date"] = body["start_date"].clone();
    created["end_date"] = body["end_date"].clone();
    (StatusCode::CREATED, Json(json!({ "rental": created }))).into_response()
}

async fn get_rental(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    record(&state, "/rentals/{id}", &headers);
    Json(rental(&id, "c1", "pending")).into_response()
}

async fn update_rental(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    record(&state, "/rentals/{id}#update", &headers);
    let mut updated = rental(&id, "c1", body["status"].as_str().unwrap_or("pending"));
    if let Some(reason) = body.get("reason") {
        updated["reason"] = reason.clone();
    }
    Json(json!({ "rental": updated })).into_response()
}

async fn approve(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    record(&state, "/rentals/admin/approve/{id}", &headers);
    if !state.account.is_admin {
        return message(StatusCode::FORBIDDEN, "Endast administratörer");
    }
    let pickup = body["pickup_address"].as_str().unwrap_or_default();
    let dropoff = body["dropoff_address"].as_str().unwrap_or_default();
    Json(json!({ "booking": booking(&id, pickup, dropoff) })).into_response()
}

async fn reject(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    record(&state, "/rentals/admin/reject/{id}", &headers);
    let mut rejected = rental(&id, "c1", "rejected");
    rejected["reason"] = body["reason"].clone();
    Json(json!({ "rental": rejected })).into_response()
}

async fn all_rentals(State(state): State<Shared>, headers: HeaderMap) -> Response {
    record(&state, "/rentals", &headers);
    Json(json!({ "rentals": [rental("r1", "c1", "pending"), rental("r2", "c2", "approved")] }))
        .into_response()
}

async fn rejected_rentals(State(state): State<Shared>, headers: HeaderMap) -> Response {
    record(&state, "/rentals/rejected", &headers);
    Json(json!([rental("r3", "c3", "rejected")])).into_response()
}

async fn approved_bookings(State(state): State<Shared>, headers: HeaderMap) -> Response {
    record(&state, "/rentals/approved", &headers);
    Json(json!([booking("r2", "Storgatan 1", "Storgatan 1")])).into_response()
}

async fn analytics(State(state): State<Shared>, headers: HeaderMap) -> Response {
    record(&state, "/rentals/analytics", &headers);
    Json(json!({
        "totalRentals": 12,
        "totalRevenue": 23400.5,
        "mostRentedCars": [{ "carId": "c1", "model": "Volvo XC60", "count": 5 }],
    }))
    .into_response()
}

async fn bookings_by_user(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "/rentals/bookings", &headers);
    state.recorded.queries.lock().push(query);
    Json(json!({ "bookings": [booking("r2", "Storgatan 1", "Kungsgatan 5")] })).into_response()
}

async fn current_rentals(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record(&state, "/rentals/current-rentals", &headers);
    state.recorded.queries.lock().push(query);
    Json(json!({ "rentals": [rental("r2", "c2", "approved")] })).into_response()
}

/// In-process stand-in for the rental API, served under `/api` on an
/// ephemeral port. Aborted on drop.
pub struct StubApi {
    pub base_url: String,
    pub account: Account,
    pub recorded: Arc<Recorded>,
    handle: JoinHandle<()>,
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl StubApi {
    pub async fn spawn(account: Account) -> Self {
        let recorded = Arc::new(Recorded::default());
        let state = Arc::new(StubState {
            account: account.clone(),
            recorded: recorded.clone(),
        });

        let api = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/register", post(register))
            .route("/cars", get(list_cars).post(create_car))
            .route("/cars/organization", get(organization_cars))
            .route("/cars/{id}", get(get_car).put(update_car).delete(delete_car))
            .route("/rentals", get(all_rentals).post(create_rental))
            .route("/rentals/rejected", get(rejected_rentals))
            .route("/rentals/approved", get(approved_bookings))
            .route("/rentals/analytics", get(analytics))
            .route("/rentals/bookings", get(bookings_by_user))
            .route("/rentals/current-rentals", get(current_rentals))
            .route("/rentals/admin/approve/{id}", put(approve))
            .route("/rentals/admin/reject/{id}", put(reject))
            .route("/rentals/{id}", get(get_rental).put(update_rental))
            .with_state(state);

        let app = Router::new().nest("/api", api);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            account,
            recorded,
            handle,
        }
    }

    pub fn config(&self, cookie_store: Option<&FsPath>) -> Config {
        let base_url = self.base_url.clone();
        let cookie_store = cookie_store.map(|p| p.display().to_string());
        Config::from_lookup(move |key| match key {
            "API_BASE_URL" => Some(base_url.clone()),
            "REQUEST_TIMEOUT_SECS" => Some("5".into()),
            "COOKIE_STORE_PATH" => cookie_store.clone(),
            _ => None,
        })
        .unwrap()
    }

    /// A fresh client stack pointed at this stub.
    pub fn app(&self) -> (AppState, Arc<HistoryNavigator>) {
        self.app_with_store(None)
    }

    pub fn app_with_store(&self, cookie_store: Option<&FsPath>) -> (AppState, Arc<HistoryNavigator>) {
        let navigator = Arc::new(HistoryNavigator::default());
        let state = AppState::new(&self.config(cookie_store), navigator.clone()).unwrap();
        (state, navigator)
    }
}

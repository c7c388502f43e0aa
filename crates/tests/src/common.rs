use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use api_client::ApiClient;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use chrono::{Duration, Utc};
use shared_types::{
    AppError, AssignCallRequest, AuthUser, CallStatus, Coordinates, EmergencyCall, LoginRequest,
    ReportEmergencyRequest, UpdateCallStatusRequest, UserRole,
};
use uuid::Uuid;

pub const PASSWORD: &str = "correct-horse";
pub const ADMIN_EMAIL: &str = "admin@dispatch.test";
pub const DRIVER_EMAIL: &str = "driver@dispatch.test";
pub const REPORTER_EMAIL: &str = "reporter@dispatch.test";
pub const AUDITOR_EMAIL: &str = "auditor@dispatch.test";

pub const DRIVER_ID: i64 = 2;
pub const REPORTER_ID: i64 = 3;

const SESSION_COOKIE: &str = "dispatch_session";

/// In-memory stand-in for the authentication backend and dispatch API.
pub struct Backend {
    users: Vec<AuthUser>,
    pub calls: Mutex<Vec<EmergencyCall>>,
    /// POST /calls requests received, valid or not.
    pub report_posts: AtomicUsize,
    /// Make `/auth/me` fail with a 500.
    fail_identity: bool,
}

impl Backend {
    pub fn seeded() -> Self {
        let now = Utc::now();
        let call = |status: CallStatus, driver: Option<i64>, minutes_ago: i64| EmergencyCall {
            id: Uuid::new_v4(),
            reporter_id: REPORTER_ID,
            description: format!("Seeded {status:?} call"),
            location: Coordinates::new(6.4541, 3.3947),
            address: None,
            status,
            assigned_driver_id: driver,
            created_at: now - Duration::minutes(minutes_ago),
        };

        Self {
            users: vec![
                user(1, ADMIN_EMAIL, "Ada Admin", UserRole::Admin),
                user(DRIVER_ID, DRIVER_EMAIL, "Dee River", UserRole::Driver),
                user(REPORTER_ID, REPORTER_EMAIL, "Rey Porter", UserRole::Reporter),
                user(4, AUDITOR_EMAIL, "Audrey Tor", UserRole::parse("auditor")),
            ],
            calls: Mutex::new(vec![
                call(CallStatus::Pending, None, 2),
                call(CallStatus::Dispatched, Some(DRIVER_ID), 15),
                call(CallStatus::Resolved, Some(DRIVER_ID), 120),
            ]),
            report_posts: AtomicUsize::new(0),
            fail_identity: false,
        }
    }

    pub fn with_failing_identity(mut self) -> Self {
        self.fail_identity = true;
        self
    }

    pub fn call_with_status(&self, status: CallStatus) -> EmergencyCall {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.status == status)
            .cloned()
            .expect("seeded call with status")
    }

    pub fn reports_received(&self) -> usize {
        self.report_posts.load(Ordering::SeqCst)
    }

    fn session_user(&self, headers: &HeaderMap) -> Option<AuthUser> {
        let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
        let id: i64 = cookies
            .split(';')
            .find_map(|pair| pair.trim().strip_prefix(&format!("{SESSION_COOKIE}=")))?
            .parse()
            .ok()?;
        self.users.iter().find(|u| u.id == id).cloned()
    }
}

fn user(id: i64, email: &str, name: &str, role: UserRole) -> AuthUser {
    AuthUser {
        id,
        email: email.to_string(),
        display_name: name.to_string(),
        vehicle_id: (role == UserRole::Driver).then(|| "AMB-7".to_string()),
        role,
        phone_number: None,
    }
}

type Shared = Arc<Backend>;

/// Start the mock backend on an ephemeral port and return a client pointed
/// at its `/api` prefix.
pub async fn spawn_backend(backend: Backend) -> (ApiClient, Shared) {
    let backend = Arc::new(backend);
    let app = Router::new().nest("/api", routes()).with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend stopped");
    });

    let client = ApiClient::new(format!("http://{addr}/api")).expect("client for mock backend");
    (client, backend)
}

/// Sign `email` in on a fresh backend and return the authenticated client.
pub async fn signed_in(email: &str) -> (ApiClient, Shared) {
    let (client, backend) = spawn_backend(Backend::seeded()).await;
    client
        .login(&LoginRequest {
            email: email.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .expect("seeded login succeeds");
    (client, backend)
}

fn routes() -> Router<Shared> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        .route("/calls", get(list_calls).post(report_call))
        .route("/calls/assigned", get(assigned_calls))
        .route("/calls/mine", get(my_reports))
        .route("/calls/{id}/status", patch(update_status))
        .route("/calls/{id}/assign", post(assign))
}

/// Error bodies use the client's own `AppError` shape.
fn error(status: StatusCode, err: AppError) -> Response {
    (status, Json(err)).into_response()
}

fn require(backend: &Backend, headers: &HeaderMap, role: UserRole) -> Result<AuthUser, Response> {
    let user = backend
        .session_user(headers)
        .ok_or_else(|| {
            error(
                StatusCode::UNAUTHORIZED,
                AppError::unauthorized("Sign in to continue"),
            )
        })?;
    if user.role != role {
        return Err(error(
            StatusCode::FORBIDDEN,
            AppError::forbidden(format!("{} only", role.label())),
        ));
    }
    Ok(user)
}

async fn login(State(backend): State<Shared>, Json(req): Json<LoginRequest>) -> Response {
    match backend.users.iter().find(|u| u.email == req.email) {
        Some(user) if req.password == PASSWORD => (
            [(
                header::SET_COOKIE,
                format!("{SESSION_COOKIE}={}; Path=/; HttpOnly", user.id),
            )],
            Json(user.clone()),
        )
            .into_response(),
        _ => error(
            StatusCode::UNAUTHORIZED,
            AppError::unauthorized("Invalid email or password"),
        ),
    }
}

async fn logout() -> Response {
    (
        StatusCode::NO_CONTENT,
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}=; Path=/; Max-Age=0"),
        )],
    )
        .into_response()
}

async fn me(State(backend): State<Shared>, headers: HeaderMap) -> Response {
    if backend.fail_identity {
        return (StatusCode::INTERNAL_SERVER_ERROR, "identity store unavailable").into_response();
    }
    match backend.session_user(&headers) {
        Some(user) => Json(user).into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn list_calls(State(backend): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(denied) = require(&backend, &headers, UserRole::Admin) {
        return denied;
    }
    Json(backend.calls.lock().unwrap().clone()).into_response()
}

async fn assigned_calls(State(backend): State<Shared>, headers: HeaderMap) -> Response {
    let driver = match require(&backend, &headers, UserRole::Driver) {
        Ok(user) => user,
        Err(denied) => return denied,
    };
    let calls: Vec<EmergencyCall> = backend
        .calls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| c.assigned_driver_id == Some(driver.id))
        .cloned()
        .collect();
    Json(calls).into_response()
}

async fn my_reports(State(backend): State<Shared>, headers: HeaderMap) -> Response {
    let reporter = match require(&backend, &headers, UserRole::Reporter) {
        Ok(user) => user,
        Err(denied) => return denied,
    };
    let calls: Vec<EmergencyCall> = backend
        .calls
        .lock()
        .unwrap()
        .iter()
        .filter(|c| c.reporter_id == reporter.id)
        .cloned()
        .collect();
    Json(calls).into_response()
}

async fn report_call(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Json(req): Json<ReportEmergencyRequest>,
) -> Response {
    backend.report_posts.fetch_add(1, Ordering::SeqCst);
    let reporter = match require(&backend, &headers, UserRole::Reporter) {
        Ok(user) => user,
        Err(denied) => return denied,
    };
    let call = EmergencyCall {
        id: Uuid::new_v4(),
        reporter_id: reporter.id,
        description: req.description,
        location: Coordinates::new(req.latitude, req.longitude),
        address: req.address,
        status: CallStatus::Pending,
        assigned_driver_id: None,
        created_at: Utc::now(),
    };
    backend.calls.lock().unwrap().push(call.clone());
    (StatusCode::CREATED, Json(call)).into_response()
}

async fn update_status(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCallStatusRequest>,
) -> Response {
    let driver = match require(&backend, &headers, UserRole::Driver) {
        Ok(user) => user,
        Err(denied) => return denied,
    };
    let mut calls = backend.calls.lock().unwrap();
    match calls
        .iter_mut()
        .find(|c| c.id == id && c.assigned_driver_id == Some(driver.id))
    {
        Some(call) => {
            call.status = req.status;
            Json(call.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, AppError::not_found("Call not found")),
    }
}

async fn assign(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignCallRequest>,
) -> Response {
    if let Err(denied) = require(&backend, &headers, UserRole::Admin) {
        return denied;
    }
    let mut calls = backend.calls.lock().unwrap();
    match calls.iter_mut().find(|c| c.id == id) {
        Some(call) => {
            call.assigned_driver_id = Some(req.driver_id);
            call.status = CallStatus::Dispatched;
            Json(call.clone()).into_response()
        }
        None => error(StatusCode::NOT_FOUND, AppError::not_found("Call not found")),
    }
}

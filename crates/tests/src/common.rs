use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::{self, Next},
    response::Response,
    Router,
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use client::{ApiClient, Session};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

/// A backend serving `router` on an ephemeral local port.
pub struct MockBackend {
    pub base_url: String,
    log: Log,
}

impl MockBackend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("backend received no request")
    }

    /// A client with an empty in-memory session.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone(), Session::in_memory())
    }

    pub fn client_with_session(&self, session: Session) -> ApiClient {
        ApiClient::new(self.base_url.clone(), session)
    }
}

async fn record(State(log): State<Log>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    log.lock().unwrap().push(Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        authorization: parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&bytes).ok(),
    });
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Serve `router` and record every request it receives.
pub async fn spawn_backend(router: Router) -> MockBackend {
    let log: Log = Arc::default();
    let app = router.layer(middleware::from_fn_with_state(log.clone(), record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("mock backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend stopped");
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        log,
    }
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}

/// An unsigned three-part credential whose payload carries `claims`.
pub fn token_with_claims(claims: Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

pub fn doctor_json(id: i64) -> Value {
    json!({
        "id": id,
        "firstName": "Gregory",
        "lastName": "House",
        "department": "Diagnostics",
        "phone": "555-010-2000",
        "specialization": "Nephrology"
    })
}

pub fn patient_json(id: i64) -> Value {
    json!({
        "id": id,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "phoneNumber": "555-010-1000",
        "address": "12 St James's Square",
        "dateOfBirth": "1990-12-10",
        "biologicalSex": "FEMALE",
        "allergies": ["Penicillin"],
        "primaryDoctor": doctor_json(3)
    })
}

pub fn appointment_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "patient": patient_json(1),
        "doctor": doctor_json(3),
        "date": "2030-04-02",
        "time": "09:30",
        "status": status
    })
}

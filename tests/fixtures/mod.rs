//! Shared fixtures: sample payloads and a live server on an ephemeral port.

#![allow(dead_code)]

use connectify::services::{ContactService, ContactServiceImpl};
use connectify::store::ContactStore;
use connectify::{build_router, AppState, NewContact};
use std::sync::mpsc;
use std::sync::Arc;

pub const FRONTEND_ORIGIN: &str = "http://localhost:5173";

pub fn ada() -> NewContact {
    NewContact::new("Ada", "ada@x.com", "555")
}

pub fn grace() -> NewContact {
    NewContact::new("Grace", "grace@navy.mil", "+1 202 555 0100").with_message("COBOL")
}

/// Serve the API over `store` on its own runtime thread.
///
/// Returns the base URL, e.g. `http://127.0.0.1:49152`.
pub fn spawn_server(store: Arc<dyn ContactStore>) -> String {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("build runtime");

        runtime.block_on(async move {
            let service = Arc::new(ContactServiceImpl::new(store)) as Arc<dyn ContactService>;
            let state = AppState::new(service, FRONTEND_ORIGIN);
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind listener");
            tx.send(listener.local_addr().expect("local addr"))
                .expect("send addr");
            axum::serve(listener, build_router(state))
                .await
                .expect("serve app");
        });
    });

    let addr = rx.recv().expect("server address");
    format!("http://{}", addr)
}

/// Status, body and selected headers of a raw call.
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    pub allow_origin: Option<String>,
    pub allow_methods: Option<String>,
    pub allow_credentials: Option<String>,
}

impl RawResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("json body")
    }
}

/// Send a request and capture the response whatever its status.
pub fn send(request: ureq::Request, body: Option<&str>) -> RawResponse {
    let result = match body {
        Some(body) => request.send_string(body),
        None => request.call(),
    };
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(e) => panic!("transport error: {}", e),
    };

    let header = |name: &str| response.header(name).map(str::to_string);
    let status = response.status();
    let allow_origin = header("access-control-allow-origin");
    let allow_methods = header("access-control-allow-methods");
    let allow_credentials = header("access-control-allow-credentials");
    let body = response.into_string().expect("read body");

    RawResponse {
        status,
        body,
        allow_origin,
        allow_methods,
        allow_credentials,
    }
}

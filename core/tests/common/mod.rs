//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use petstore::{ApiError, AsyncTransport, HttpRequest, HttpResponse, Transport};

pub const API_KEY: &str = "special-key";

/// Transport that records every request and answers with a canned response.
pub struct Replay {
    response: HttpResponse,
    pub seen: Mutex<Vec<HttpRequest>>,
}

impl Replay {
    pub fn new(status: u16, content_type: &str, body: &str) -> Self {
        Self {
            response: HttpResponse {
                status,
                headers: vec![("content-type".to_string(), content_type.to_string())],
                body: body.as_bytes().to_vec(),
            },
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn ok_json(body: &str) -> Self {
        Self::new(200, "application/json", body)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.seen.lock().unwrap().last().cloned().expect("no request recorded")
    }

    fn answer(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

impl Transport for Replay {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.answer(request)
    }
}

#[async_trait]
impl AsyncTransport for Replay {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.answer(request)
    }
}

/// Start the mock server on a random port in a background thread.
pub fn spawn_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_key(listener, API_KEY).await
        })
        .unwrap();
    });

    addr
}

/// Accept connections and never answer, keeping them open.
pub fn spawn_silent_server() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });

    addr
}

/// A local address nothing listens on.
pub fn unused_addr() -> SocketAddr {
    std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap()
}

//! Shared test helpers
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use coolctl::http::{ApiRequest, ApiResponse, Transport, TransportError};
use coolctl::{ClientConfig, HttpClient};

pub const BASE_URL: &str = "https://coolify.example.com";
pub const TOKEN: &str = "test-token";

#[derive(Default)]
struct State {
    responses: VecDeque<Result<ApiResponse, String>>,
    requests: Vec<ApiRequest>,
}

/// Transport that replays queued responses and records every request
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &[u8]) -> &Self {
        self.state.lock().unwrap().responses.push_back(Ok(ApiResponse {
            status,
            body: body.to_vec(),
        }));
        self
    }

    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(status, body.to_string().as_bytes())
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request recorded")
    }

    /// Client over a clone of this transport
    pub fn client(&self) -> HttpClient {
        self.client_for(BASE_URL)
    }

    pub fn client_for(&self, base_url: &str) -> HttpClient {
        let config = ClientConfig::new(base_url, TOKEN).unwrap();
        HttpClient::with_transport(config, self.clone())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        match state.responses.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Request(message)),
            None => Err(TransportError::Request("no response queued".to_string())),
        }
    }
}

/// Request body as JSON
pub fn body_json(request: &ApiRequest) -> Value {
    serde_json::from_slice(request.body.as_deref().expect("request has no body")).unwrap()
}

pub fn project(uuid: &str, name: &str) -> Value {
    json!({
        "uuid": uuid,
        "name": name,
        "description": null,
        "teamId": "0",
        "createdAt": "2024-05-01T10:00:00.000000Z",
        "updatedAt": "2024-05-01T10:00:00.000000Z",
    })
}

pub fn server(uuid: &str) -> Value {
    json!({
        "uuid": uuid,
        "name": "edge-1",
        "ip": "10.0.0.5",
        "port": 22,
        "status": "reachable",
        "isCloud": false,
        "teamId": "0",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z",
    })
}

pub fn application(uuid: &str) -> Value {
    json!({
        "uuid": uuid,
        "name": "api",
        "repository": "https://github.com/acme/api",
        "branch": "main",
        "projectUuid": "p-1",
        "environmentName": "production",
        "status": "running:healthy",
        "buildPack": "nixpacks",
        "teamId": "0",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z",
    })
}

pub fn database(uuid: &str, db_type: &str) -> Value {
    json!({
        "uuid": uuid,
        "name": "orders",
        "type": db_type,
        "version": "16",
        "projectUuid": "p-1",
        "environmentName": "production",
        "status": "running:healthy",
        "teamId": "0",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z",
    })
}

pub fn service(uuid: &str) -> Value {
    json!({
        "uuid": uuid,
        "name": "analytics",
        "type": "plausible",
        "projectUuid": "p-1",
        "environmentName": "production",
        "status": "running",
        "teamId": "0",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z",
    })
}

pub fn deployment(uuid: &str, application_uuid: &str) -> Value {
    json!({
        "uuid": uuid,
        "applicationUuid": application_uuid,
        "status": "waiting",
        "createdAt": "2024-05-01T10:00:00Z",
        "updatedAt": "2024-05-01T10:00:00Z",
    })
}

pub fn env_var(uuid: &str, key: &str) -> Value {
    json!({
        "uuid": uuid,
        "key": key,
        "value": "postgres://db/orders",
        "isSecret": false,
        "resourceUuid": "a-1",
    })
}

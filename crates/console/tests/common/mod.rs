#![allow(dead_code)]

use async_trait::async_trait;
use catalog_console::{service::ApiClient, state::AppState, store::MemoryStore};
use serde_json::{Value, json};
use shared::{
    abstract_trait::{
        ApiReply, ApiRequest, ConfirmPromptTrait, DynHttpTransport, DynKeyValueStore,
        HttpMethod, HttpTransportTrait,
    },
    config::Config,
    errors::ClientError,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// Records every request and answers from a queue of canned replies.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<Result<ApiReply, ClientError>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, &body.to_string());
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.replies.lock().unwrap().push_back(Ok(ApiReply {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_error(&self, error: ClientError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn methods_and_endpoints(&self) -> Vec<(HttpMethod, String)> {
        self.requests()
            .into_iter()
            .map(|r| (r.method, r.endpoint))
            .collect()
    }
}

#[async_trait]
impl HttpTransportTrait for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, ClientError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no reply queued".to_string())))
    }
}

/// Confirmation prompt with a fixed answer that remembers what it was asked.
pub struct ScriptedPrompt {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl ConfirmPromptTrait for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer
    }
}

pub fn api_client(transport: &Arc<MockTransport>) -> ApiClient {
    let transport: DynHttpTransport = transport.clone();
    ApiClient::new(transport)
}

pub fn config(auth_mode: &str) -> Config {
    let auth_mode = auth_mode.to_string();
    Config::from_lookup(move |key| match key {
        "AUTH_MODE" => Some(auth_mode.clone()),
        "FAKE_AUTH_DELAY_MS" => Some("0".to_string()),
        "API_URL" => Some("http://api.test".to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn app_state(auth_mode: &str, transport: &Arc<MockTransport>) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let dyn_store: DynKeyValueStore = store.clone();
    let dyn_transport: DynHttpTransport = transport.clone();
    let state = AppState::with_parts(config(auth_mode), dyn_transport, dyn_store);
    (state, store)
}

pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "message": "OK", "data": data, "status": 200 })
}

pub fn page(data: Vec<Value>, total_pages: u32) -> Value {
    json!({ "data": data, "totalPages": total_pages })
}

pub fn category_json(id: i32, name: &str) -> Value {
    json!({
        "id": id,
        "nombre": name,
        "descripcion": null,
        "activa": true,
        "fecha_creacion": "2025-01-14T09:30:00",
        "fecha_actualizacion": null
    })
}

pub fn product_json(id: i32, name: &str, category_id: i32) -> Value {
    json!({
        "id": id,
        "nombre": name,
        "descripcion": "Demo",
        "precio": 2500000.0,
        "stock": 15,
        "categoria_id": category_id,
        "categoria": { "id": category_id, "nombre": "Tecnología" },
        "activo": true
    })
}

pub fn user_json(id: i32, email: &str, active: bool) -> Value {
    json!({
        "id": id,
        "email": email,
        "nombre": "Ana",
        "apellido": "Pérez",
        "activo": active,
        "rol": "admin"
    })
}

pub fn login_json(token: &str) -> Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "user": {
            "id": 7,
            "email": "ana@example.com",
            "nombre": "Ana",
            "apellido": "Pérez",
            "activo": true
        }
    })
}

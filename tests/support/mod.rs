//! In-process stub of the Story Spoiler API
//!
//! Mirrors the live API's routes, status codes and messages with an
//! in-memory store, so the suite can run without network access.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

pub const USERNAME: &str = "reader";
pub const PASSWORD: &str = "secret";
const TOKEN: &str = "stub-token";

type Reply = (StatusCode, Json<Value>);

/// Knobs for breaking the stub in specific ways
#[derive(Debug, Default, Clone, Copy)]
pub struct StubBehavior {
    /// Authentication returns 200 with an empty token
    pub blank_token: bool,
    /// Create returns 500 for every request
    pub break_create: bool,
    /// Create stores the story and returns 201 with an unexpected message
    pub wrong_create_message: bool,
    /// Create stores the story and returns 201 without a `storyId`
    pub omit_story_id: bool,
    /// List elements carry duplicate id keys and non-string fields
    pub odd_list_fields: bool,
}

struct StubState {
    behavior: StubBehavior,
    next_id: AtomicU64,
    stories: Mutex<BTreeMap<String, Value>>,
}

/// Handle for a running stub; the server stops when dropped
pub struct StubApi {
    base_url: String,
    join: JoinHandle<()>,
    state: Arc<StubState>,
}

impl StubApi {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of stories currently stored
    pub fn story_count(&self) -> usize {
        self.state.stories.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.join.abort();
    }
}

pub async fn spawn_stub() -> StubApi {
    spawn_stub_with(StubBehavior::default()).await
}

pub async fn spawn_stub_with(behavior: StubBehavior) -> StubApi {
    let state = Arc::new(StubState {
        behavior,
        next_id: AtomicU64::new(1),
        stories: Mutex::new(BTreeMap::new()),
    });

    let app = Router::new()
        .route("/api/User/Authentication", post(handle_auth))
        .route("/api/Story/Create", post(handle_create))
        .route("/api/Story/Edit/:id", put(handle_edit))
        .route("/api/Story/All", get(handle_all))
        .route("/api/Story/Delete/:id", delete(handle_delete))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
    let join = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubApi {
        base_url,
        join,
        state,
    }
}

fn msg(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "msg": message })))
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

fn field<'a>(body: &'a Value, name: &str) -> &'a str {
    body.get(name).and_then(Value::as_str).unwrap_or("")
}

async fn handle_auth(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Reply {
    if field(&body, "username") != USERNAME || field(&body, "password") != PASSWORD {
        return msg(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    let token = if state.behavior.blank_token { "" } else { TOKEN };
    (StatusCode::OK, Json(json!({ "username": USERNAME, "accessToken": token })))
}

async fn handle_create(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    if !authorized(&headers) {
        return msg(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    if state.behavior.break_create {
        return msg(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong");
    }
    if field(&body, "Title").is_empty() || field(&body, "Description").is_empty() {
        return msg(StatusCode::BAD_REQUEST, "Title and Description are required");
    }

    let id = format!("story-{}", state.next_id.fetch_add(1, Ordering::SeqCst));
    let story = json!({
        "id": id,
        "title": field(&body, "Title"),
        "description": field(&body, "Description"),
        "url": field(&body, "Url"),
    });
    state.stories.lock().expect("store lock").insert(id.clone(), story);

    let message = if state.behavior.wrong_create_message {
        "Created, probably"
    } else {
        "Successfully created!"
    };
    if state.behavior.omit_story_id {
        return msg(StatusCode::CREATED, message);
    }
    (
        StatusCode::CREATED,
        Json(json!({ "msg": message, "storyId": id })),
    )
}

async fn handle_edit(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    if !authorized(&headers) {
        return msg(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let mut stories = state.stories.lock().expect("store lock");
    match stories.get_mut(&id) {
        Some(story) => {
            story["title"] = json!(field(&body, "Title"));
            story["description"] = json!(field(&body, "Description"));
            story["url"] = json!(field(&body, "Url"));
            msg(StatusCode::OK, "Successfully edited")
        }
        None => msg(StatusCode::NOT_FOUND, "No spoilers..."),
    }
}

async fn handle_all(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return msg(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let stories = state.stories.lock().expect("store lock");
    let items = stories
        .iter()
        .map(|(id, story)| {
            if state.behavior.odd_list_fields {
                json!({ "id": id, "storyId": id, "title": story["title"], "url": 0, "views": [1, 2] })
            } else {
                story.clone()
            }
        })
        .collect();
    (StatusCode::OK, Json(Value::Array(items)))
}

async fn handle_delete(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Reply {
    if !authorized(&headers) {
        return msg(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    match state.stories.lock().expect("store lock").remove(&id) {
        Some(_) => msg(StatusCode::OK, "Deleted successfully!"),
        None => msg(StatusCode::BAD_REQUEST, "Unable to delete this story spoiler!"),
    }
}

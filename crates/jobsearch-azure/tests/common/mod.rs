//! Stub search service for adapter tests.
//!
//! Serves the three REST endpoints from canned JSON on a random local port
//! and records every request body it receives.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use jobsearch_core::IndexServiceConfig;
use serde_json::{Value, json};

pub const API_KEY: &str = "test-key";

/// Index name the stub answers with HTTP 500.
pub const BROKEN_INDEX: &str = "broken";

/// Index name the stub does not know; every call gets Azure's 404 error body.
pub const MISSING_INDEX: &str = "missing";

/// Search text for which the stub returns highlights that are not a map.
pub const MALFORMED_HIGHLIGHTS: &str = "garbage";

/// Search text for which the stub returns a suggestion with no text.
pub const MALFORMED_SUGGESTION: &str = "untitled";

#[derive(Debug, Default)]
struct Recorded {
    bodies: Vec<(String, Value)>,
    queries: Vec<String>,
    lookups: Vec<String>,
}

#[derive(Clone, Default)]
struct StubState {
    recorded: Arc<Mutex<Recorded>>,
}

pub struct StubServer {
    pub endpoint: String,
    recorded: Arc<Mutex<Recorded>>,
}

impl StubServer {
    pub async fn start() -> Self {
        let state = StubState::default();
        let recorded = state.recorded.clone();
        let app = Router::new()
            .route("/indexes/{index}/docs/search", post(search))
            .route("/indexes/{index}/docs/suggest", post(suggest))
            .route("/indexes/{index}/docs/{key}", get(lookup))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{addr}"),
            recorded,
        }
    }

    pub fn config(&self) -> IndexServiceConfig {
        IndexServiceConfig {
            api_key: API_KEY.to_string(),
            endpoint: Some(self.endpoint.clone()),
            ..Default::default()
        }
    }

    pub fn config_with_jobs_index(&self, index: &str) -> IndexServiceConfig {
        IndexServiceConfig {
            jobs_index: index.to_string(),
            ..self.config()
        }
    }

    /// Request bodies received so far, tagged with `index/action`.
    pub fn bodies(&self) -> Vec<(String, Value)> {
        self.recorded.lock().unwrap().bodies.clone()
    }

    /// Query strings of every request received so far.
    pub fn queries(&self) -> Vec<String> {
        self.recorded.lock().unwrap().queries.clone()
    }

    /// Lookups received so far, as `index/key`.
    pub fn lookups(&self) -> Vec<String> {
        self.recorded.lock().unwrap().lookups.clone()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("api-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == API_KEY)
}

fn reject(index: &str, headers: &HeaderMap) -> Option<Response> {
    if !authorized(headers) {
        return Some((StatusCode::FORBIDDEN, "invalid api key").into_response());
    }
    if index == BROKEN_INDEX {
        return Some(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": {"code": "", "message": "index unavailable"}})),
            )
                .into_response(),
        );
    }
    if index == MISSING_INDEX {
        return Some(
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": {
                        "code": "",
                        "message": format!("The index '{index}' for service 'stub' was not found.")
                    }
                })),
            )
                .into_response(),
        );
    }
    None
}

fn record_query(state: &StubState, uri: &Uri) {
    let query = uri.query().unwrap_or_default().to_string();
    state.recorded.lock().unwrap().queries.push(query);
}

fn record(state: &StubState, uri: &Uri, tag: String, body: Value) {
    record_query(state, uri);
    state.recorded.lock().unwrap().bodies.push((tag, body));
}

async fn search(
    State(state): State<StubState>,
    Path(index): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, &uri, format!("{index}/search"), body.clone());
    if let Some(rejection) = reject(&index, &headers) {
        return rejection;
    }

    if index == "zipcodes" {
        return Json(json!({
            "value": [{
                "@search.score": 1.0,
                "zipcode": "10001",
                "city": "New York",
                "state": "NY",
                "latitude": 40.7506,
                "longitude": -73.9972
            }]
        }))
        .into_response();
    }

    if body["search"] == "nothing" {
        return Json(json!({"@odata.count": 0, "value": []})).into_response();
    }

    if body["search"] == MALFORMED_HIGHLIGHTS {
        return Json(json!({"value": [{"id": "1", "@search.highlights": "garbage"}]}))
            .into_response();
    }

    Json(json!({
        "@odata.count": 42,
        "@search.facets": {
            "business_title": [{"count": 3, "value": "Data Analyst"}],
            "salary_range_from": [{"count": 20, "value": 50000}]
        },
        "value": [
            {
                "@search.score": 3.1,
                "@search.highlights": {"job_description": ["senior <b>analyst</b>"]},
                "id": "87990",
                "agency": "DEPT OF FINANCE",
                "business_title": "Data Analyst",
                "salary_range_from": 55000.0,
                "salary_range_to": 70000.0,
                "posting_date": "2016-02-01T00:00:00Z",
                "geo_location": {"type": "Point", "coordinates": [-74.0, 40.7]},
                "tags": null
            },
            {
                "@search.score": 2.4,
                "id": "90011",
                "business_title": "Analyst"
            }
        ]
    }))
    .into_response()
}

async fn suggest(
    State(state): State<StubState>,
    Path(index): Path<String>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, &uri, format!("{index}/suggest"), body.clone());
    if let Some(rejection) = reject(&index, &headers) {
        return rejection;
    }
    if body["search"] == MALFORMED_SUGGESTION {
        return Json(json!({"value": [{"id": "1"}]})).into_response();
    }
    Json(json!({
        "value": [
            {"@search.text": "Accountant", "id": "1"},
            {"@search.text": "Accounting Manager", "id": "2"}
        ]
    }))
    .into_response()
}

async fn lookup(
    State(state): State<StubState>,
    Path((index, key)): Path<(String, String)>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record_query(&state, &uri);
    state
        .recorded
        .lock()
        .unwrap()
        .lookups
        .push(format!("{index}/{key}"));
    if let Some(rejection) = reject(&index, &headers) {
        return rejection;
    }
    match key.as_str() {
        "87990" => Json(json!({
            "id": "87990",
            "business_title": "Data Analyst",
            "job_description": "Analyze data."
        }))
        .into_response(),
        "garbled" => (StatusCode::OK, "not json").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

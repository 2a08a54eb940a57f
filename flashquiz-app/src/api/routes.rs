use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use flashquiz_core::{DeckService, DeckValue, SaveReceipt};

use crate::api::dto::{KeysResp, LoadQuery, LoadResp, MsgResp};
use crate::api::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub service: DeckService,
}

/// An unreadable or non-JSON body counts as empty.
fn body_of(body: Result<Json<Value>, JsonRejection>) -> Value {
    match body {
        Ok(Json(v)) => v,
        Err(e) => {
            debug!(error = %e, "unreadable request body");
            Value::Null
        }
    }
}

fn field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.as_object()?.get(key)
}

pub async fn save_deck(
    State(st): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SaveReceipt>, ApiError> {
    let body = body_of(body);
    let Some(Value::String(name)) = field(&body, "name") else {
        return Err(ApiError::Missing("name"));
    };
    let value = field(&body, "value").ok_or(ApiError::Missing("value"))?;
    let value = DeckValue::deserialize(value).map_err(|e| {
        debug!(error = %e, "bad deck value");
        ApiError::Malformed("value")
    })?;
    Ok(Json(st.service.save_deck(name, value).await?))
}

pub async fn load_deck(
    State(st): State<Arc<AppState>>,
    Query(q): Query<LoadQuery>,
) -> Result<Json<LoadResp>, ApiError> {
    let name = q.name.ok_or(ApiError::Missing("name"))?;
    let value = st.service.load_deck(&name).await?;
    Ok(Json(LoadResp { value }))
}

pub async fn list_decks(State(st): State<Arc<AppState>>) -> Result<Json<KeysResp>, ApiError> {
    let keys = st.service.list_decks().await?;
    Ok(Json(KeysResp { keys }))
}

pub async fn save_score(
    State(st): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MsgResp>, ApiError> {
    let body = body_of(body);
    let Some(Value::String(record)) = field(&body, "value") else {
        return Err(ApiError::Missing("value"));
    };
    st.service.save_score(record).await?;
    Ok(Json(MsgResp { msg: "Saved".into() }))
}

pub async fn list_scores(State(st): State<Arc<AppState>>) -> Result<Json<KeysResp>, ApiError> {
    let keys = st.service.list_scores().await?;
    Ok(Json(KeysResp { keys }))
}

#[cfg(test)]
mod tests {
    use crate::api::server::router;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use flashquiz_core::DeckService;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn json_of(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    fn spanish() -> Value {
        json!([[["hola", "hello"], ["adios", "bye"]], "hola|hello\nadios|bye"])
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let app = router(DeckService::in_memory());
        let save = json!({"name": "Spanish", "value": spanish()});

        let (status, body) = send(&app, post("/api/save", save.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), json!({"replaced": false}));

        let (status, body) = send(&app, post("/api/save", save)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), json!({"replaced": true}));

        let (status, body) = send(&app, get("/api/load?name=Spanish")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), json!({"value": spanish()}));
    }

    #[tokio::test]
    async fn save_reports_missing_fields() {
        let app = router(DeckService::in_memory());
        let cases = [
            json!({"value": [[], ""]}),
            json!({"name": 7, "value": [[], ""]}),
            json!({"name": "x"}),
            json!({"name": "x", "value": "nope"}),
            json!({"name": "", "value": [[], ""]}),
            json!({"name": "x".repeat(31), "value": [[], ""]}),
        ];
        for case in cases {
            let (status, _) = send(&app, post("/api/save", case)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        let (_, body) = send(&app, post("/api/save", json!({"value": [[], ""]}))).await;
        assert_eq!(body, b"required argument \"name\" was missing");
        let (_, body) = send(&app, post("/api/save", json!({"name": "x"}))).await;
        assert_eq!(body, b"required argument \"value\" was missing");

        let (_, body) = send(&app, get("/api/list")).await;
        assert_eq!(json_of(&body), json!({"keys": []}));
    }

    #[tokio::test]
    async fn non_object_bodies_are_missing_fields() {
        let app = router(DeckService::in_memory());

        for body in [json!(["Ana, Spanish: 50"]), Value::Null, json!("x")] {
            let (status, text) = send(&app, post("/api/saveScores", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(text, b"required argument \"value\" was missing");
        }
        let (status, text) = send(&app, post("/api/save", json!(["Spanish", spanish()]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(text, b"required argument \"name\" was missing");

        let untyped = Request::post("/api/saveScores")
            .body(Body::from(r#"{"value":"Ana, Spanish: 50"}"#))
            .unwrap();
        let (status, text) = send(&app, untyped).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(text, b"required argument \"value\" was missing");

        let garbled = Request::post("/api/save")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(&app, garbled).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, get("/api/listScores")).await;
        assert_eq!(json_of(&body), json!({"keys": []}));
        let (_, body) = send(&app, get("/api/list")).await;
        assert_eq!(json_of(&body), json!({"keys": []}));
    }

    #[tokio::test]
    async fn load_errors() {
        let app = router(DeckService::in_memory());

        let (status, body) = send(&app, get("/api/load")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"required argument \"name\" was missing");

        let (status, body) = send(&app, get("/api/load?name=ghost")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"name not found");
    }

    #[tokio::test]
    async fn list_is_in_first_save_order() {
        let app = router(DeckService::in_memory());
        for name in ["b", "a", "b"] {
            let save = json!({"name": name, "value": [[["x", "y"]], "x|y"]});
            let (status, _) = send(&app, post("/api/save", save)).await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, body) = send(&app, get("/api/list")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), json!({"keys": ["b", "a"]}));
    }

    #[tokio::test]
    async fn scores_append_and_validate() {
        let app = router(DeckService::in_memory());

        let score = json!({"value": "Ana, Spanish: 50"});
        let (status, body) = send(&app, post("/api/saveScores", score)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), json!({"msg": "Saved"}));

        let (status, _) = send(&app, post("/api/saveScores", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, body) = send(&app, post("/api/saveScores", json!({"value": 50}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, b"required argument \"value\" was missing");

        let (status, body) = send(&app, get("/api/listScores")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), json!({"keys": ["Ana, Spanish: 50"]}));
    }
}

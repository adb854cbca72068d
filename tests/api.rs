//! End-to-end tests of the router over an in-memory store.

#![allow(clippy::panic, clippy::indexing_slicing)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use ggm_festival_api::api;
use ggm_festival_api::app_state::AppState;
use ggm_festival_api::persistence::SqliteStore;
use ggm_festival_api::persistence::models::TradeLog;

const MANAGER_TOKEN: &str = "booth-manager-token";
const MANAGER_UUID: &str = "booth-manager-uuid";

struct Harness {
    app: Router,
    store: SqliteStore,
}

struct Reply {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    body: Vec<u8>,
}

impl Reply {
    fn json(&self) -> Value {
        let Ok(value) = serde_json::from_slice(&self.body) else {
            panic!("body is not json: {:?}", self.text());
        };
        value
    }

    fn text(&self) -> String {
        let Ok(text) = String::from_utf8(self.body.clone()) else {
            panic!("body is not utf-8");
        };
        text
    }
}

async fn harness() -> Harness {
    let Ok(store) = SqliteStore::in_memory().await else {
        panic!("in-memory store should open");
    };
    let seeded = sqlx::query("INSERT INTO Managers (token, name) VALUES (?, 'booth')")
        .bind(MANAGER_TOKEN)
        .execute(store.pool())
        .await;
    assert!(seeded.is_ok(), "seed manager");
    let seeded =
        sqlx::query("INSERT INTO Users (uuid, token, username, coins) VALUES (?, ?, 'booth', 0)")
            .bind(MANAGER_UUID)
            .bind(MANAGER_TOKEN)
            .execute(store.pool())
            .await;
    assert!(seeded.is_ok(), "seed manager account");
    Harness {
        app: api::app(AppState::new(store.clone())),
        store,
    }
}

impl Harness {
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Reply {
        let body = body.map_or_else(Body::empty, |v| Body::from(v.to_string()));
        self.send_raw(method, uri, body).await
    }

    async fn send_raw(&self, method: Method, uri: &str, body: Body) -> Reply {
        let Ok(request) = Request::builder().method(method).uri(uri).body(body) else {
            panic!("request for {uri} should build");
        };
        let Ok(response) = self.app.clone().oneshot(request).await else {
            panic!("router is infallible");
        };
        let status = response.status();
        let headers = response.headers().clone();
        let Ok(body) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("response body should buffer");
        };
        Reply {
            status,
            headers,
            body: body.to_vec(),
        }
    }

    async fn get(&self, uri: &str) -> Reply {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> Reply {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn register(&self, username: &str) -> Value {
        let reply = self.post("/api/register", json!({"username": username})).await;
        assert_eq!(reply.status, StatusCode::OK);
        reply.json()
    }

    async fn logs(&self, uuid: &str) -> Vec<TradeLog> {
        let Ok(logs) = self.store.trade_logs_for(uuid).await else {
            panic!("trade logs for {uuid} should load");
        };
        logs
    }

    async fn coins(&self, uuid: &str) -> i64 {
        let reply = self.get(&format!("/api/user?uuid={uuid}")).await;
        assert_eq!(reply.status, StatusCode::OK);
        let Some(coins) = reply.json()["coins"].as_i64() else {
            panic!("coins should be an integer");
        };
        coins
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    let Some(field) = value[key].as_str() else {
        panic!("{key} should be a string in {value}");
    };
    field
}

fn assert_boundary_headers(reply: &Reply) {
    assert_eq!(reply.headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(reply.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        reply.headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, OPTIONS"
    );
    assert_eq!(
        reply.headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type"
    );
}

#[tokio::test]
async fn root_serves_banner_as_json_content_type() {
    let h = harness().await;
    let reply = h.get("/").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.text(), "GGM Festival API Endpoint");
    assert_boundary_headers(&reply);
}

#[tokio::test]
async fn paths_outside_api_prefix_are_not_found() {
    let h = harness().await;
    for uri in ["/rankings", "/api", "/health", "/apix/rankings"] {
        let reply = h.get(uri).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(reply.json()["error"]["kind"], "not_found");
        assert_boundary_headers(&reply);
    }
}

#[tokio::test]
async fn unknown_api_path_is_404_for_every_method_but_options() {
    let h = harness().await;
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        let reply = h.send(method.clone(), "/api/nowhere", None).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(reply.json()["error"]["message"], "Not found");
    }
    let reply = h.send(Method::OPTIONS, "/api/nowhere", None).await;
    assert_eq!(reply.status, StatusCode::OK);
}

#[tokio::test]
async fn wrong_method_on_known_path_is_404() {
    let h = harness().await;
    let reply = h.get("/api/give").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    let reply = h.post("/api/rankings", json!({})).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json()["error"]["kind"], "not_found");
}

#[tokio::test]
async fn head_on_known_get_route_is_404() {
    let h = harness().await;
    for uri in ["/api/rankings", "/api/user?uuid=x", "/api/products", "/api/ggm-events"] {
        let reply = h.send(Method::HEAD, uri, None).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{uri}");
        assert_boundary_headers(&reply);
    }
}

#[tokio::test]
async fn options_short_circuits_with_empty_body() {
    let h = harness().await;
    for uri in ["/api/give", "/api/rankings", "/", "/elsewhere"] {
        let reply = h.send(Method::OPTIONS, uri, None).await;
        assert_eq!(reply.status, StatusCode::OK, "{uri}");
        assert!(reply.body.is_empty(), "{uri}");
        assert_boundary_headers(&reply);
    }
}

#[tokio::test]
async fn register_then_lookup_hides_token() {
    let h = harness().await;
    let registered = h.register("minji").await;
    assert_eq!(registered["username"], "minji");
    assert_eq!(registered["coins"], 0);
    let uuid = str_field(&registered, "uuid");
    assert!(registered["token"].is_string());

    let reply = h.get(&format!("/api/user?uuid={uuid}")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_boundary_headers(&reply);
    let profile = reply.json();
    assert_eq!(profile, json!({"uuid": uuid, "username": "minji", "coins": 0}));
    assert!(profile.get("token").is_none());
}

#[tokio::test]
async fn register_same_username_twice() {
    let h = harness().await;
    let a = h.register("same").await;
    let b = h.register("same").await;
    assert_ne!(a["uuid"], b["uuid"]);
    assert_ne!(a["token"], b["token"]);
}

#[tokio::test]
async fn user_lookup_accepts_uuid_after_other_params() {
    let h = harness().await;
    let registered = h.register("late").await;
    let uuid = str_field(&registered, "uuid");
    let reply = h.get(&format!("/api/user?lang=ko&uuid={uuid}")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["username"], "late");
}

#[tokio::test]
async fn unknown_or_missing_user_is_404_with_korean_message() {
    let h = harness().await;
    for uri in ["/api/user?uuid=ghost", "/api/user"] {
        let reply = h.get(uri).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{uri}");
        let body = reply.json();
        assert_eq!(body["error"]["kind"], "user_not_found");
        assert_eq!(body["error"]["message"], "유저를 찾을 수 없습니다");
    }
}

#[tokio::test]
async fn repeated_uuid_uses_the_first_one() {
    let h = harness().await;
    let registered = h.register("first").await;
    let uuid = str_field(&registered, "uuid");

    let reply = h.get(&format!("/api/user?uuid={uuid}&uuid=other")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["username"], "first");

    let reply = h.get("/api/user?uuid=a&uuid=b").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_boundary_headers(&reply);
    assert_eq!(reply.json()["error"]["message"], "유저를 찾을 수 없습니다");
}

#[tokio::test]
async fn rankings_length_order_and_medals() {
    let h = harness().await;
    let mut uuids = Vec::new();
    for name in ["a", "b", "c", "d"] {
        let user = h.register(name).await;
        uuids.push(str_field(&user, "uuid").to_string());
    }
    for (uuid, coins) in uuids.iter().zip([10, 40, 30, 20]) {
        let reply = h
            .post(
                "/api/give",
                json!({"token": MANAGER_TOKEN, "uuid": uuid, "coins": coins, "reason": "seed"}),
            )
            .await;
        assert_eq!(reply.status, StatusCode::OK);
    }

    let reply = h.get("/api/rankings").await;
    assert_eq!(reply.status, StatusCode::OK);
    let rankings = reply.json();
    let Some(rankings) = rankings.as_array() else {
        panic!("rankings should be an array");
    };
    // Four registered users plus the manager's own account.
    assert_eq!(rankings.len(), 5);

    let coins: Vec<i64> = rankings
        .iter()
        .filter_map(|r| r["coins"].as_i64())
        .collect();
    assert!(coins.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(coins, vec![40, 30, 20, 10, 0]);

    let ranks: Vec<Value> = rankings.iter().map(|r| r["rank"].clone()).collect();
    assert_eq!(ranks, vec![json!("🥇"), json!("🥈"), json!("🥉"), json!(4), json!(5)]);
    assert_eq!(rankings[0]["name"], "b");
}

#[tokio::test]
async fn give_credits_and_logs() {
    let h = harness().await;
    let user = h.register("winner").await;
    let uuid = str_field(&user, "uuid");

    let reply = h
        .post(
            "/api/give",
            json!({"token": MANAGER_TOKEN, "uuid": uuid, "coins": 50, "reason": "prize"}),
        )
        .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.text(), "성공");
    assert_boundary_headers(&reply);
    assert_eq!(h.coins(uuid).await, 50);

    let logs = h.logs(uuid).await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].value, 50);
    assert_eq!(logs[0].from_uuid, MANAGER_UUID);
    assert_eq!(logs[0].to_uuid, uuid);
    assert_eq!(logs[0].reason, "prize");
}

#[tokio::test]
async fn take_debits_below_zero_and_logs() {
    let h = harness().await;
    let user = h.register("spender").await;
    let uuid = str_field(&user, "uuid");

    let reply = h
        .post(
            "/api/take",
            json!({"token": MANAGER_TOKEN, "uuid": uuid, "coins": 50, "reason": "snack"}),
        )
        .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(h.coins(uuid).await, -50);

    let logs = h.logs(uuid).await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].value, -50);
    assert_eq!(logs[0].from_uuid, uuid);
    assert_eq!(logs[0].to_uuid, MANAGER_UUID);
}

#[tokio::test]
async fn give_with_unknown_token_is_401_and_mutates_nothing() {
    let h = harness().await;
    let user = h.register("target").await;
    let uuid = str_field(&user, "uuid");
    let user_token = str_field(&user, "token");

    for path in ["/api/give", "/api/take"] {
        let reply = h
            .post(
                path,
                json!({"token": user_token, "uuid": uuid, "coins": 50, "reason": "prize"}),
            )
            .await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED, "{path}");
        let body = reply.json();
        assert_eq!(body["error"]["kind"], "unauthorized");
        assert_eq!(body["error"]["message"], "권한 없음");
    }
    assert_eq!(h.coins(uuid).await, 0);
    assert!(h.logs(uuid).await.is_empty());
}

#[tokio::test]
async fn give_to_unknown_user_is_404() {
    let h = harness().await;
    let reply = h
        .post(
            "/api/give",
            json!({"token": MANAGER_TOKEN, "uuid": "ghost", "coins": 5, "reason": "x"}),
        )
        .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json()["error"]["kind"], "user_not_found");
    assert!(h.logs(MANAGER_UUID).await.is_empty());
}

#[tokio::test]
async fn malformed_bodies_are_500() {
    let h = harness().await;
    let reply = h
        .send_raw(Method::POST, "/api/register", Body::from("not json"))
        .await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);

    let reply = h
        .post("/api/give", json!({"token": MANAGER_TOKEN, "uuid": "x"}))
        .await;
    assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply.json()["error"]["kind"], "malformed_body");
}

#[tokio::test]
async fn current_event_and_products() {
    let h = harness().await;
    let reply = h.get("/api/ggm-events").await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json()["error"]["kind"], "event_not_found");

    let seeded = sqlx::query(
        "INSERT INTO Events (name, description, current) VALUES ('warmup', NULL, 0), ('finale', 'night', 1)",
    )
    .execute(h.store.pool())
    .await;
    assert!(seeded.is_ok(), "seed events");
    let seeded = sqlx::query(
        "INSERT INTO Products (name, description, price, type) VALUES ('cola', NULL, 2, 0), ('card', NULL, 1, 1)",
    )
    .execute(h.store.pool())
    .await;
    assert!(seeded.is_ok(), "seed products");

    let event = h.get("/api/ggm-events").await.json();
    assert!(event.is_object());
    assert_eq!(event["name"], "finale");
    assert_eq!(event["current"], true);

    let products = h.get("/api/products").await.json();
    assert_eq!(products["buy"].as_array().map(Vec::len), Some(1));
    assert_eq!(products["sell"].as_array().map(Vec::len), Some(1));
    assert_eq!(products["buy"][0]["name"], "cola");
    assert_eq!(products["buy"][0]["type"], 0);
    assert_eq!(products["sell"][0]["type"], 1);
}

#[tokio::test]
async fn oversized_bodies_get_structured_error() {
    let h = harness().await;
    for uri in ["/api/register", "/api/give", "/api/take"] {
        let body = Body::from(vec![b' '; 3 * 1024 * 1024]);
        let reply = h.send_raw(Method::POST, uri, body).await;
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_boundary_headers(&reply);
        assert_eq!(reply.json()["error"]["kind"], "malformed_body");
    }
}

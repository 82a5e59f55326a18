use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use user_crud_server::state::AppState;

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(user_crud_server::serve(listener, AppState::in_memory()));
    format!("http://{addr}")
}

async fn get(base: &str, path: &str) -> (StatusCode, String) {
    let response = reqwest::get(format!("{base}{path}")).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn full_lifecycle_over_http() {
    let base = spawn_server().await;

    assert_eq!(
        get(&base, "/create?id=1&name=Alice&age=30").await,
        (StatusCode::CREATED, String::new())
    );
    assert_eq!(
        get(&base, "/find?id=1").await,
        (
            StatusCode::OK,
            r#"{"id":"1","name":"Alice","age":30}"#.to_string()
        )
    );

    assert_eq!(
        get(&base, "/update?id=1&name=Bob&age=31").await,
        (StatusCode::OK, String::new())
    );
    let (status, body) = get(&base, "/find?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"id": "1", "name": "Bob", "age": 31})
    );

    assert_eq!(
        get(&base, "/delete?id=1").await,
        (StatusCode::OK, String::new())
    );
    assert_eq!(
        get(&base, "/find?id=1").await,
        (StatusCode::NOT_FOUND, "user not found".to_string())
    );
}

#[tokio::test]
async fn invalid_age_is_rejected_without_side_effects() {
    let base = spawn_server().await;

    assert_eq!(
        get(&base, "/create?id=1&name=Alice&age=abc").await,
        (StatusCode::BAD_REQUEST, "Invalid age parameter".to_string())
    );
    assert_eq!(get(&base, "/list").await, (StatusCode::OK, "[]".to_string()));
    assert_eq!(get(&base, "/find?id=1").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_parameters_are_bad_requests() {
    let base = spawn_server().await;

    for path in [
        "/create",
        "/create?id=1&name=Alice",
        "/create?id=&name=Alice&age=3",
        "/update?id=1&age=3",
    ] {
        assert_eq!(
            get(&base, path).await,
            (StatusCode::BAD_REQUEST, "Missing parameters".to_string()),
            "{path}"
        );
    }
    for path in ["/find", "/find?id=", "/delete", "/delete?name=x"] {
        assert_eq!(
            get(&base, path).await,
            (StatusCode::BAD_REQUEST, "Missing id parameter".to_string()),
            "{path}"
        );
    }
}

#[tokio::test]
async fn repository_errors_on_mutations_are_server_errors() {
    let base = spawn_server().await;
    get(&base, "/create?id=1&name=Alice&age=30").await;

    assert_eq!(
        get(&base, "/create?id=1&name=Eve&age=5").await,
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "user already exists".to_string()
        )
    );
    assert_eq!(
        get(&base, "/update?id=2&name=Eve&age=5").await,
        (StatusCode::INTERNAL_SERVER_ERROR, "user not found".to_string())
    );
    assert_eq!(
        get(&base, "/delete?id=2").await,
        (StatusCode::INTERNAL_SERVER_ERROR, "user not found".to_string())
    );

    // the duplicate create left the original untouched
    let (_, body) = get(&base, "/find?id=1").await;
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"id": "1", "name": "Alice", "age": 30})
    );
}

#[tokio::test]
async fn routes_accept_any_method_and_decode_query() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/create?id=a%20b&name=Alice%20Smith&age=-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .delete(format!("{base}/find?id=a+b"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"id": "a b", "name": "Alice Smith", "age": -1})
    );
}

#[tokio::test]
async fn repeated_query_keys_use_first_value() {
    let base = spawn_server().await;

    get(&base, "/create?id=1&id=2&name=Alice&age=30").await;

    assert_eq!(get(&base, "/find?id=1").await.0, StatusCode::OK);
    assert_eq!(get(&base, "/find?id=2").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_creates_all_listed() {
    let base = spawn_server().await;

    let requests: Vec<_> = (0..32)
        .map(|i| {
            let base = base.clone();
            tokio::spawn(async move { get(&base, &format!("/create?id={i}&name=n{i}&age={i}")).await })
        })
        .collect();
    for request in requests {
        assert_eq!(request.await.unwrap().0, StatusCode::CREATED);
    }

    let (status, body) = get(&base, "/list").await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Value> = serde_json::from_str(&body).unwrap();
    let mut ids: Vec<i64> = listed
        .iter()
        .map(|u| u["id"].as_str().unwrap().parse().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..32).collect::<Vec<i64>>());
}

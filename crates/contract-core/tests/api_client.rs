//! Integration tests for the REST client against a local mock server.

use contract_core::service::{ApiClient, AuthService, ContractQuery, ContractService};
use contract_core::{ApiConfig, ClientError, ContractPayload, Credentials, Registration, Task};
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri())).with_token(token.map(String::from))
}

#[tokio::test]
async fn test_list_contracts_sends_filters_and_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contracts"))
        .and(query_param("skip", "9"))
        .and(query_param("limit", "9"))
        .and(query_param("tags", "priority,legal"))
        .and(query_param("search", "acme"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_count": 10,
            "contracts": [{
                "id": "65a1",
                "name": "Acme Deal",
                "tasks": [{"name": "Design", "amount": 500.0}],
                "tags": ["priority"],
                "total_amount": 500.0
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = ContractQuery {
        page: 2,
        page_size: 9,
        tags: vec!["priority".to_string(), "legal".to_string()],
        search: "acme".to_string(),
    };
    let page = client(&mock_server, Some("tok-1"))
        .list_contracts(&query)
        .await
        .expect("list should succeed");

    assert_eq!(page.total_count, 10);
    assert_eq!(page.contracts[0].name, "Acme Deal");
}

#[tokio::test]
async fn test_requests_without_token_have_no_auth_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_count": 0,
            "contracts": []
        })))
        .mount(&mock_server)
        .await;

    client(&mock_server, None)
        .list_contracts(&ContractQuery::new(1, 9))
        .await
        .expect("list should succeed");

    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(requests[0].url.query(), Some("skip=0&limit=9"));
}

#[tokio::test]
async fn test_create_contract_posts_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contracts"))
        .and(body_json(serde_json::json!({
            "name": "Acme Deal",
            "tasks": [{"name": "Design", "amount": 500.0}],
            "tags": ["priority"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "inserted_id": "65a1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let payload = ContractPayload {
        name: "Acme Deal".to_string(),
        tasks: vec![Task::new("Design", 500.0)],
        tags: vec!["priority".to_string()],
    };
    let created = client(&mock_server, Some("tok"))
        .create_contract(&payload)
        .await
        .expect("create should succeed");

    assert_eq!(created.inserted_id, "65a1");
}

#[tokio::test]
async fn test_update_and_delete_hit_contract_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/contracts/existing-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/contracts/existing-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Some("tok"));
    let payload = ContractPayload {
        name: "Updated Contract".to_string(),
        tasks: vec![Task::new("Old Task", 100.0)],
        tags: vec!["old-tag".to_string()],
    };
    api.update_contract("existing-id", &payload).await.expect("update should succeed");
    api.delete_contract("existing-id").await.expect("delete should succeed");
}

#[tokio::test]
async fn test_not_found_carries_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contracts/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "Contract not found"
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server, Some("tok"))
        .get_contract("missing")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ClientError::Api {
            status: 404,
            detail: Some("Contract not found".to_string())
        }
    );
}

#[tokio::test]
async fn test_suggestions_and_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["Task A", "Task B"])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["tag1", "tag2"])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_contracts": 2,
            "total_amount": 750.0,
            "contracts_by_tags": {"tag1": 2},
            "contracts_by_tasks": {"Task A": 1, "Task B": 1}
        })))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Some("tok"));
    assert_eq!(api.list_task_names().await.unwrap(), vec!["Task A", "Task B"]);
    assert_eq!(api.list_tag_names().await.unwrap(), vec!["tag1", "tag2"]);

    let summary = api.get_summary().await.unwrap();
    assert_eq!(summary.total_contracts, 2);
    assert_eq!(summary.contracts_by_tasks.len(), 2);
}

#[tokio::test]
async fn test_login_is_form_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("username=alice&password=s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-xyz",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let token = client(&mock_server, None)
        .login(&Credentials::new("alice", "s3cret"))
        .await
        .expect("login should succeed");

    assert_eq!(token.access_token, "tok-xyz");
}

#[tokio::test]
async fn test_bad_credentials_are_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Incorrect username or password"
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server, None)
        .login(&Credentials::new("alice", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Login failed"), "Incorrect username or password");
}

#[tokio::test]
async fn test_register_posts_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(serde_json::json!({
            "username": "bob",
            "hashed_password": "pw",
            "email": "bob@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"username": "bob"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server, None)
        .register(&Registration::from_form("bob", "pw", "bob@example.com", ""))
        .await
        .expect("register should succeed");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = ApiClient::new(ApiConfig::new(format!("http://127.0.0.1:{}", port)))
        .get_summary()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}

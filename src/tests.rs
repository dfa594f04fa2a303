//! Integration tests for the portal backend.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::Config;
use crate::seed;
use crate::store::{RecordStore, Repository};
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_admin_code(Some("test-admin-code".to_string())).await
    }

    async fn with_admin_code(admin_code: Option<String>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");

        // Initialize the record store
        let store = Arc::new(RecordStore::open(&data_dir));
        let repo = Arc::new(Repository::new(store));

        // Create config
        let config = Config {
            admin_code: admin_code.clone(),
            data_dir,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
        };

        let state = AppState {
            repo,
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let mut client_builder = Client::builder();
        if let Some(code) = admin_code {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert("x-admin-code", code.parse().unwrap());
            client_builder = client_builder.default_headers(headers);
        }

        TestFixture {
            client: client_builder.build().unwrap(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn project_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Test project description",
        "date": "January 2025",
        "location": "Yaba, Lagos",
        "imageUrl": "https://example.com/p.jpg",
        "category": "Water"
    })
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_auth_missing_code() {
    let fixture = TestFixture::new().await;

    // Request without the admin code header
    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/admin/requests"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_auth_invalid_code() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/admin/requests"))
        .header("x-admin-code", "wrong-code")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_auth_valid_code() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/admin/requests"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_auth_bearer_token_accepted() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/admin/portfolio"))
        .header("Authorization", "Bearer test-admin-code")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_auth_disabled_without_configured_code() {
    let fixture = TestFixture::with_admin_code(None).await;

    // Dev mode: the staff surface is open when no code is configured
    let resp = fixture
        .client
        .get(fixture.url("/api/admin/requests"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_public_routes_need_no_code() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    for path in ["/api/projects", "/api/members", "/api/resources"] {
        let resp = client.get(fixture.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), 200, "public route {} should be open", path);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["success"], true);
    }
}

#[tokio::test]
async fn test_seeded_collections_served_before_any_write() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/projects"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let projects = body["data"].as_array().unwrap();
    assert_eq!(projects.len(), seed::initial_projects().len());
    assert_eq!(projects[0]["title"], "Ikorodu Community Borehole");
    assert_eq!(projects[0]["category"], "Water");

    // Requests start empty, no seed
    let resp = fixture
        .client
        .get(fixture.url("/api/admin/requests"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_project_upsert_and_delete() {
    let fixture = TestFixture::new().await;
    let seed_count = seed::initial_projects().len();

    // Save a new project: appended at the end
    let save_resp = fixture
        .client
        .put(fixture.url("/api/admin/projects"))
        .json(&project_json("p-test", "Borehole"))
        .send()
        .await
        .unwrap();
    assert_eq!(save_resp.status(), 200);
    let save_body: Value = save_resp.json().await.unwrap();
    assert_eq!(save_body["data"]["id"], "p-test");

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let projects = list_body["data"].as_array().unwrap();
    assert_eq!(projects.len(), seed_count + 1);
    assert_eq!(projects[seed_count]["title"], "Borehole");

    // Save the same id again: replaced in place, not duplicated
    fixture
        .client
        .put(fixture.url("/api/admin/projects"))
        .json(&project_json("p-test", "Borehole v2"))
        .send()
        .await
        .unwrap();

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let projects = list_body["data"].as_array().unwrap();
    assert_eq!(projects.len(), seed_count + 1);
    assert_eq!(projects[seed_count]["title"], "Borehole v2");

    // Delete it
    let delete_resp = fixture
        .client
        .delete(fixture.url("/api/admin/projects/p-test"))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), seed_count);

    // Deleting again is a silent no-op
    let delete_again = fixture
        .client
        .delete(fixture.url("/api/admin/projects/p-test"))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_again.status(), 200);
}

#[tokio::test]
async fn test_member_save_and_delete() {
    let fixture = TestFixture::new().await;

    let save_resp = fixture
        .client
        .put(fixture.url("/api/admin/members"))
        .json(&json!({
            "id": "m-test",
            "name": "Chinedu Okafor",
            "role": "Executive",
            "position": "Treasurer",
            "department": "Electrical Engineering",
            "stateCode": "EE/2022/044",
            "imageUrl": "https://example.com/m.jpg"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(save_resp.status(), 200);
    let save_body: Value = save_resp.json().await.unwrap();
    assert_eq!(save_body["data"]["position"], "Treasurer");

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/members"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let members = list_body["data"].as_array().unwrap();
    assert!(members.iter().any(|m| m["id"] == "m-test"));

    let delete_resp = fixture
        .client
        .delete(fixture.url("/api/admin/members/m-test"))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/members"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let members = list_body["data"].as_array().unwrap();
    assert!(members.iter().all(|m| m["id"] != "m-test"));
}

#[tokio::test]
async fn test_resource_added_to_library() {
    let fixture = TestFixture::new().await;
    let seed_count = seed::initial_resources().len();

    let add_resp = fixture
        .client
        .post(fixture.url("/api/admin/resources"))
        .json(&json!({
            "title": "Dues Payment Guide",
            "description": "How to pay chapter dues online",
            "type": "Link",
            "url": "https://example.com/dues"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(add_resp.status(), 200);
    let add_body: Value = add_resp.json().await.unwrap();
    assert!(!add_body["data"]["id"].as_str().unwrap().is_empty());
    assert_eq!(add_body["data"]["type"], "Link");

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/resources"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let resources = list_body["data"].as_array().unwrap();
    assert_eq!(resources.len(), seed_count + 1);
    assert_eq!(resources[seed_count]["title"], "Dues Payment Guide");
}

#[tokio::test]
async fn test_request_submission_flow() {
    let fixture = TestFixture::new().await;

    // The public submits without any admin code
    let public = Client::new();
    let submit_resp = public
        .post(fixture.url("/api/requests"))
        .json(&json!({
            "requesterName": "Ada Obi",
            "contact": "ada@example.com",
            "location": "Ikorodu",
            "category": "Schools",
            "description": "Our classroom block needs new roofing."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(submit_resp.status(), 200);
    let submit_body: Value = submit_resp.json().await.unwrap();
    assert!(!submit_body["data"]["id"].as_str().unwrap().is_empty());
    assert!(!submit_body["data"]["timestamp"].as_str().unwrap().is_empty());

    // But cannot read the inbox
    let forbidden = public
        .get(fixture.url("/api/admin/requests"))
        .send()
        .await
        .unwrap();
    assert_eq!(forbidden.status(), 401);

    // Staff sees the submission
    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/admin/requests"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let requests = list_body["data"].as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["requesterName"], "Ada Obi");
}

#[tokio::test]
async fn test_attendance_batch_recorded_in_order() {
    let fixture = TestFixture::new().await;

    let record_resp = fixture
        .client
        .post(fixture.url("/api/admin/attendance"))
        .json(&json!({
            "records": [
                { "id": "a1", "date": "2025-01-14", "memberId": "mem-chairman", "status": "Present" },
                { "id": "a2", "date": "2025-01-14", "memberId": "mem-gensec", "status": "Excused" }
            ]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(record_resp.status(), 200);

    let list_body: Value = fixture
        .client
        .get(fixture.url("/api/admin/attendance"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let records = list_body["data"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "a1");
    assert_eq!(records[1]["id"], "a2");
    assert_eq!(records[1]["status"], "Excused");
}

#[tokio::test]
async fn test_portfolio_snapshot() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/admin/portfolio"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["data"]["projects"].is_array());
    assert!(body["data"]["members"].is_array());
    assert!(body["data"]["resources"].is_array());
    assert!(body["data"]["requests"].is_array());
    assert!(body["data"]["attendance"].is_array());
    assert_eq!(body["data"]["darkMode"], false);
}

#[tokio::test]
async fn test_dark_mode_round_trip() {
    let fixture = TestFixture::new().await;

    let get_body: Value = fixture
        .client
        .get(fixture.url("/api/preferences/dark-mode"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(get_body["data"]["darkMode"], false);

    let put_resp = fixture
        .client
        .put(fixture.url("/api/preferences/dark-mode"))
        .json(&json!({ "darkMode": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(put_resp.status(), 200);

    let get_body: Value = fixture
        .client
        .get(fixture.url("/api/preferences/dark-mode"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(get_body["data"]["darkMode"], true);
}

#[tokio::test]
async fn test_validation_rejects_blank_fields() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .put(fixture.url("/api/admin/projects"))
        .json(&project_json("p-blank", "   "))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let blank_request = fixture
        .client
        .post(fixture.url("/api/requests"))
        .json(&json!({
            "requesterName": "",
            "contact": "ada@example.com",
            "location": "Ikorodu",
            "category": "Water",
            "description": "Borehole needed"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank_request.status(), 400);
}

#[tokio::test]
async fn test_mutations_require_admin_code() {
    let fixture = TestFixture::new().await;

    let public = Client::new();
    let resp = public
        .put(fixture.url("/api/admin/projects"))
        .json(&project_json("p-sneak", "Sneaky"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Nothing was written
    let list_body: Value = public
        .get(fixture.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        list_body["data"].as_array().unwrap().len(),
        seed::initial_projects().len()
    );
}

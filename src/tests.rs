//! Integration tests for the QuantumSpace backend and client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::assistant::Assistant;
use crate::client::chat::FALLBACK_REPLY;
use crate::client::{ApiClient, ChatPanel, ClientError, DraftResearch, ResearchPanel};
use crate::db::{init_database, Repository};
use crate::errors::AppError;
use crate::models::{Category, ChatMessage};
use crate::{create_router, AppState};

/// Assistant that echoes or fails without touching the network.
enum StubAssistant {
    Reply(&'static str),
    Echo,
    Fail,
}

#[async_trait]
impl Assistant for StubAssistant {
    async fn reply(&self, message: &str) -> Result<String, AppError> {
        match self {
            StubAssistant::Reply(text) => Ok(text.to_string()),
            StubAssistant::Echo => Ok(format!("echo: {}", message)),
            StubAssistant::Fail => Err(AppError::Assistant(
                "Error processing chat message: provider down".to_string(),
            )),
        }
    }
}

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    repo: Arc<Repository>,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_assistant(StubAssistant::Echo, false).await
    }

    async fn with_assistant(assistant: StubAssistant, seed: bool) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));
        if seed {
            repo.seed_samples().await.expect("Failed to seed");
        }

        let state = AppState {
            repo: repo.clone(),
            assistant: Arc::new(assistant),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            repo,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn api(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }
}

fn draft(title: &str, category: Category) -> DraftResearch {
    DraftResearch {
        title: title.to_string(),
        category,
        description: format!("{} description", title),
        findings: format!("{} findings", title),
    }
}

#[tokio::test]
async fn test_root_and_health() {
    let fixture = TestFixture::new().await;

    let resp = fixture.client.get(fixture.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "QuantumSpace Research Platform API");
    assert_eq!(body["status"], "operational");

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_research_crud() {
    let fixture = TestFixture::new().await;

    // Create
    let create_resp = fixture
        .client
        .post(fixture.url("/api/research"))
        .json(&json!({
            "title": "Neutrino Telescope",
            "category": "space",
            "description": "Ice-cube detector",
            "findings": "Three candidate events"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let created: Value = create_resp.json().await.unwrap();
    assert_eq!(created["title"], "Neutrino Telescope");
    assert_eq!(created["category"], "space");
    assert!(created["created_at"].is_string());
    let id = created["id"].as_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());

    // List
    let list: Value = fixture
        .client
        .get(fixture.url("/api/research"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());

    // Delete
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/research/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);
    let body: Value = delete_resp.json().await.unwrap();
    assert_eq!(body["message"], "Research item deleted successfully");
    assert_eq!(body["id"], id.as_str());

    // Deleting again is a 404
    let again = fixture
        .client
        .delete(fixture.url(&format!("/api/research/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), 404);
    let body: Value = again.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["detail"], "Research item not found");
}

#[tokio::test]
async fn test_research_validation_errors() {
    let fixture = TestFixture::new().await;

    // Blank title
    let resp = fixture
        .client
        .post(fixture.url("/api/research"))
        .json(&json!({
            "title": "   ",
            "category": "ai",
            "description": "",
            "findings": ""
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Unknown category is rejected by the JSON extractor
    let resp = fixture
        .client
        .post(fixture.url("/api/research"))
        .json(&json!({
            "title": "Gene drives",
            "category": "biology",
            "description": "",
            "findings": ""
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let list: Value = fixture
        .client
        .get(fixture.url("/api/research"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_categories_endpoint() {
    let fixture = TestFixture::new().await;

    let body: Value = fixture
        .client
        .get(fixture.url("/api/research/categories"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let categories = body["categories"].as_array().unwrap();
    let ids: Vec<&str> = categories.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["space", "quantum", "ai", "database"]);
    assert_eq!(categories[1]["name"], "Quantum Theory");
}

#[tokio::test]
async fn test_seeded_stats() {
    let fixture = TestFixture::with_assistant(StubAssistant::Echo, true).await;

    let body: Value = fixture
        .client
        .get(fixture.url("/api/research/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_research"], 4);
    assert_eq!(body["categories"]["space"], 1);
    assert_eq!(body["categories"]["quantum"], 1);
    assert_eq!(body["categories"]["ai"], 1);
    assert_eq!(body["categories"]["database"], 1);
    assert!(body["last_updated"].is_string());

    // Seeding a populated table is a no-op
    assert_eq!(fixture.repo.seed_samples().await.unwrap(), 0);
    assert_eq!(fixture.repo.count_research().await.unwrap(), 4);
}

#[tokio::test]
async fn test_chat_endpoint() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/chat"))
        .json(&json!({ "message": "What is superposition?" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["response"], "echo: What is superposition?");

    let resp = fixture
        .client
        .post(fixture.url("/api/chat"))
        .json(&json!({ "message": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_chat_endpoint_assistant_failure() {
    let fixture = TestFixture::with_assistant(StubAssistant::Fail, false).await;

    let resp = fixture
        .client
        .post(fixture.url("/api/chat"))
        .json(&json!({ "message": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "ASSISTANT_ERROR");
}

#[tokio::test]
async fn test_client_chat_panel_against_server() {
    let fixture = TestFixture::with_assistant(StubAssistant::Reply("X"), false).await;
    let api = fixture.api();
    let mut panel = ChatPanel::new();

    panel.set_input("Explain quantum entanglement in simple terms");
    assert!(panel.send_message(&api).await);

    let tail = &panel.messages()[panel.messages().len() - 2..];
    assert_eq!(
        tail,
        &[
            ChatMessage::user("Explain quantum entanglement in simple terms"),
            ChatMessage::assistant("X"),
        ]
    );
    assert!(!panel.is_loading());
}

#[tokio::test]
async fn test_client_chat_panel_fallback_on_server_error() {
    let fixture = TestFixture::with_assistant(StubAssistant::Fail, false).await;
    let api = fixture.api();
    let mut panel = ChatPanel::new();

    panel.set_input("hello");
    panel.send_message(&api).await;

    assert_eq!(
        panel.messages().last().unwrap(),
        &ChatMessage::assistant(FALLBACK_REPLY)
    );
    assert!(!panel.is_loading());
}

#[tokio::test]
async fn test_client_research_panel_against_server() {
    let fixture = TestFixture::with_assistant(StubAssistant::Echo, true).await;
    let api = fixture.api();
    let mut panel = ResearchPanel::new();

    assert!(panel.list_records(&api).await);
    assert_eq!(panel.records().len(), 4);

    // Create resynchronizes with the server's list
    *panel.draft_mut() = draft("Qubit Error Correction", Category::Quantum);
    assert!(panel.create_record(&api).await);
    assert_eq!(panel.draft(), &DraftResearch::default());
    assert_eq!(panel.records(), api.list_records().await.unwrap().as_slice());
    assert_eq!(panel.records().len(), 5);
    assert_eq!(panel.records()[4].title, "Qubit Error Correction");

    // Delete resynchronizes too, with no stale entry left behind
    let id = panel.records()[4].id.clone();
    assert!(panel.delete_record(&api, &id).await);
    assert_eq!(panel.records().len(), 4);
    assert!(panel.records().iter().all(|r| r.id != id));

    // Deleting an unknown id fails and leaves the list as it was
    let before = panel.records().to_vec();
    assert!(!panel.delete_record(&api, "missing").await);
    assert_eq!(panel.records(), before.as_slice());
}

#[tokio::test]
async fn test_client_failed_create_keeps_draft() {
    let fixture = TestFixture::new().await;
    let api = fixture.api();
    let mut panel = ResearchPanel::new();

    let rejected = DraftResearch {
        title: String::new(),
        category: Category::Database,
        description: "Sharded archive".to_string(),
        findings: "Pending".to_string(),
    };
    *panel.draft_mut() = rejected.clone();

    assert!(!panel.create_record(&api).await);
    assert_eq!(panel.draft(), &rejected);
    assert!(panel.records().is_empty());

    let err = api.create_record(&rejected).await.unwrap_err();
    match err {
        ClientError::Status { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Title is required");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_client_delete_with_reserved_characters_targets_no_other_record() {
    let fixture = TestFixture::with_assistant(StubAssistant::Echo, true).await;
    let api = fixture.api();
    let mut panel = ResearchPanel::new();

    assert!(panel.list_records(&api).await);
    let before = panel.records().to_vec();
    let real = before[0].id.clone();

    for suffix in ["?not-this-one", "#frag", "/extra"] {
        let id = format!("{}{}", real, suffix);
        assert!(!panel.delete_record(&api, &id).await, "deleted {:?}", id);
    }

    assert_eq!(panel.records(), before.as_slice());
    assert_eq!(api.list_records().await.unwrap(), before);
}

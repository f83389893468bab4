use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use prikup::{
    game::CardImages, router, AppState, InMemoryKeyValueStore, KeyValueStore, TableResponse,
    TableService,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub store: Arc<dyn KeyValueStore + Send + Sync>,
    pub images: CardImages,
    pub app: Router,
}

pub struct TestSetupBuilder {
    store: Option<Arc<dyn KeyValueStore + Send + Sync>>,
    image_base: String,
}

#[allow(dead_code)]
impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            image_base: "https://img.test".to_string(),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn KeyValueStore + Send + Sync>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> TestSetup {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryKeyValueStore::new()));
        let images = CardImages::new(self.image_base);
        let app = router(AppState::new(store.clone(), images.clone()));

        TestSetup { store, images, app }
    }
}

#[allow(dead_code)]
impl TestSetup {
    /// A service sharing this setup's store, as the composition root would build it
    pub fn service(&self) -> TableService {
        TableService::new(self.store.clone(), self.images.clone())
    }

    pub async fn request(&self, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    pub async fn get_table(&self) -> TableResponse {
        let (status, body) = self.request("GET", "/table").await;
        assert_eq!(status, StatusCode::OK, "GET /table should succeed");
        serde_json::from_slice(&body).unwrap()
    }

    pub async fn redeal(&self) -> TableResponse {
        let (status, body) = self.request("POST", "/deal").await;
        assert_eq!(status, StatusCode::OK, "POST /deal should succeed");
        serde_json::from_slice(&body).unwrap()
    }
}

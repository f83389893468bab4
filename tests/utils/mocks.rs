use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use prikup::{AppError, InMemoryKeyValueStore, KeyValueStore};

/// In-memory store whose writes can be switched off mid-test
pub struct FlakyStore {
    inner: InMemoryKeyValueStore,
    fail_writes: AtomicBool,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryKeyValueStore::new(),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Storage("write rejected".to_string()));
        }
        self.inner.set(key, value).await
    }
}

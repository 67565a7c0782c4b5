//! The two container regions the widget owns between render cycles.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::pagination::{ControlKind, PageControl, Pagination};

#[async_trait]
pub trait PagerRegions: Send + Sync {
    async fn set_users(&self, html: String);
    async fn set_pagination(&self, pagination: Pagination);
    async fn clear_pagination(&self);
    async fn scroll_to_top(&self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionsSnapshot {
    pub users_html: String,
    pub pagination: Pagination,
    pub scrolls_to_top: u32,
}

/// In-process regions: keeps the latest markup and the live control set.
#[derive(Debug, Default)]
pub struct MemoryRegions {
    inner: Mutex<RegionsSnapshot>,
}

impl MemoryRegions {
    pub async fn snapshot(&self) -> RegionsSnapshot {
        self.inner.lock().await.clone()
    }

    pub async fn controls(&self) -> Vec<PageControl> {
        self.inner.lock().await.pagination.controls.clone()
    }

    pub async fn control(&self, kind: ControlKind, label: &str) -> Option<PageControl> {
        self.inner
            .lock()
            .await
            .pagination
            .controls
            .iter()
            .find(|control| control.kind == kind && control.label == label)
            .cloned()
    }
}

#[async_trait]
impl PagerRegions for MemoryRegions {
    async fn set_users(&self, html: String) {
        self.inner.lock().await.users_html = html;
    }

    async fn set_pagination(&self, pagination: Pagination) {
        self.inner.lock().await.pagination = pagination;
    }

    async fn clear_pagination(&self) {
        self.inner.lock().await.pagination = Pagination::default();
    }

    async fn scroll_to_top(&self) {
        self.inner.lock().await.scrolls_to_top += 1;
    }
}

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    client::RecommendationsSource,
    error::{PanelError, PanelResult},
    models::{page_controls, DatasetId, FilterType, PageSnapshot},
    render::Renderer,
};

/// Page and filter selection driving the next fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    /// 1-indexed page to display
    pub page: u32,
    /// Active filter, if any
    pub filter: Option<FilterType>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            page: 1,
            filter: None,
        }
    }
}

/// Interactive browser over a dataset's recommendations
///
/// Owns its page/filter state explicitly and funnels every state change
/// through one fetch-and-render cycle. Cheaply cloneable; clones share
/// state, so overlapping loads from different tasks are allowed. A load
/// whose response arrives after a newer load has started is dropped rather
/// than rendered, keeping arrival order from overriding request order.
#[derive(Clone)]
pub struct RecommendationsPanel {
    inner: Arc<RwLock<PanelInner>>,
    source: Arc<dyn RecommendationsSource>,
    dataset_id: DatasetId,
    sequence: Arc<AtomicU64>,
}

struct PanelInner {
    state: PanelState,
    last: Option<PageSnapshot>,
    renderer: Box<dyn Renderer>,
}

impl RecommendationsPanel {
    pub fn new(
        source: Arc<dyn RecommendationsSource>,
        renderer: Box<dyn Renderer>,
        dataset_id: DatasetId,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(PanelInner {
                state: PanelState::default(),
                last: None,
                renderer,
            })),
            source,
            dataset_id,
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Dataset this panel browses
    pub fn dataset_id(&self) -> &DatasetId {
        &self.dataset_id
    }

    /// Current page/filter selection
    pub async fn state(&self) -> PanelState {
        self.inner.read().await.state.clone()
    }

    /// Most recently rendered page, if any
    pub async fn current(&self) -> Option<PageSnapshot> {
        self.inner.read().await.last.clone()
    }

    /// Initial display: first page, no filter
    pub async fn show(&self) -> PanelResult<()> {
        self.load(1, None).await
    }

    /// Applies a filter and reloads from the first page
    pub async fn apply_filter(&self, filter: FilterType) -> PanelResult<()> {
        self.load(1, Some(filter)).await
    }

    /// Drops the active filter and reloads from the first page
    pub async fn clear_filter(&self) -> PanelResult<()> {
        self.load(1, None).await
    }

    /// Jumps to a page, keeping the active filter
    pub async fn select_page(&self, page: u32) -> PanelResult<()> {
        if page == 0 {
            return Err(PanelError::InvalidInput(
                "page numbers start at 1".to_string(),
            ));
        }
        let filter = self.inner.read().await.state.filter.clone();
        self.load(page, filter).await
    }

    /// Fetches one page and, unless superseded, renders it.
    ///
    /// On error the renderer is left untouched; the previous content stands
    /// and the error is returned to the caller.
    async fn load(&self, page: u32, filter: Option<FilterType>) -> PanelResult<()> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        // Commit the selection before the fetch, so concurrent callers see
        // the requested state while the response is in flight.
        {
            let mut inner = self.inner.write().await;
            inner.state = PanelState {
                page,
                filter: filter.clone(),
            };
        }

        // The lock is not held across the network call.
        let body = self
            .source
            .fetch_page(&self.dataset_id, page, filter)
            .await?;

        let controls = page_controls(body.page, body.total_pages);

        let mut inner = self.inner.write().await;
        if self.sequence.load(Ordering::SeqCst) != seq {
            // A newer load started while this response was in flight.
            tracing::debug!(
                dataset_id = %self.dataset_id,
                page = body.page,
                "Dropping stale recommendations response"
            );
            return Ok(());
        }

        inner.renderer.render_html(&body.html)?;
        inner.renderer.render_pagination(&controls)?;
        inner.state.page = body.page;
        inner.last = Some(PageSnapshot {
            body,
            fetched_at: Utc::now(),
        });
        Ok(())
    }
}

/// Recommendations source abstraction
///
/// The panel is driven through this seam so it can run against the real hub
/// endpoint or an in-memory double in tests.
use crate::{
    error::PanelResult,
    models::{DatasetId, FilterType, RecommendationsPage},
};

pub mod http;

pub use http::HttpRecommendationsClient;

/// Source of recommendation pages for a dataset
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationsSource: Send + Sync {
    /// Fetch one page of recommendations.
    ///
    /// `filter` narrows the result set server-side; `None` asks for the
    /// unfiltered listing.
    async fn fetch_page(
        &self,
        dataset_id: &DatasetId,
        page: u32,
        filter: Option<FilterType>,
    ) -> PanelResult<RecommendationsPage>;
}

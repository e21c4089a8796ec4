use std::time::Duration;

use reqwest::Client as HttpClient;
use uuid::Uuid;

use crate::{
    error::{PanelError, PanelResult},
    models::{DatasetId, FilterType, RecommendationsPage},
};

use super::RecommendationsSource;

/// HTTP client for the dataset hub recommendations endpoint
///
/// Owns URL and query-string construction for
/// `GET {base}/dataset/{id}/recommendations?page={n}&filter_type={t?}`.
#[derive(Clone)]
pub struct HttpRecommendationsClient {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRecommendationsClient {
    /// Creates a client for the hub at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> PanelResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http_client,
            base_url,
        })
    }
}

/// Query parameters for a page request.
///
/// `page` is always present; `filter_type` only when a filter is active, so
/// the unfiltered listing never carries an empty parameter.
fn query_params(page: u32, filter: Option<&FilterType>) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", page.to_string())];
    if let Some(filter) = filter {
        params.push(("filter_type", filter.as_str().to_string()));
    }
    params
}

#[async_trait::async_trait]
impl RecommendationsSource for HttpRecommendationsClient {
    async fn fetch_page(
        &self,
        dataset_id: &DatasetId,
        page: u32,
        filter: Option<FilterType>,
    ) -> PanelResult<RecommendationsPage> {
        let request_id = Uuid::new_v4();
        let url = format!("{}/dataset/{}/recommendations", self.base_url, dataset_id);

        let response = self
            .http_client
            .get(&url)
            .query(&query_params(page, filter.as_ref()))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                request_id = %request_id,
                dataset_id = %dataset_id,
                status = %status,
                "Recommendations fetch failed"
            );
            return Err(PanelError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let page_body: RecommendationsPage = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                dataset_id = %dataset_id,
                error = %e,
                "Failed to decode recommendations response"
            );
            PanelError::Decode(e)
        })?;

        tracing::info!(
            request_id = %request_id,
            dataset_id = %dataset_id,
            page = page_body.page,
            total_pages = page_body.total_pages,
            "Recommendations page fetched"
        );

        Ok(page_body)
    }
}

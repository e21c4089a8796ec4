//! Client-side panel for a dataset hub's recommendation listings.
//!
//! Given the location path of a dataset page (`/dataset/{id}/...`), the
//! panel fetches server-rendered recommendation pages from
//! `GET /dataset/{id}/recommendations`, hands the HTML to a [`Renderer`]
//! and rebuilds pagination controls from the response. Page and filter
//! selection live in an explicit [`PanelState`]; every change triggers one
//! fetch-and-render cycle, and responses superseded by a newer load are
//! dropped instead of rendered.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod panel;
pub mod render;

pub use client::{HttpRecommendationsClient, RecommendationsSource};
pub use config::Config;
pub use error::{PanelError, PanelResult};
pub use models::{
    page_controls, DatasetId, FilterType, PageControl, PageSnapshot, RecommendationsPage,
};
pub use panel::{PanelState, RecommendationsPanel};
pub use render::{Renderer, TerminalRenderer};

use crate::api::Item;
use crate::catalog::Resource;
use crate::query::{total_pages, Filter, PageSize, QueryState};
use crate::ui::mvi::UiState;

/// Where the current page is in its fetch lifecycle.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadPhase {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch resolved; `items`/`total` are current.
    Ready,
    /// The last fetch failed. Carries the display string; table and
    /// pagination stay suppressed until the next successful fetch.
    Failed(String),
}

/// The fetch-relevant projection of the state. When a transition changes
/// this, the runtime starts a new fetch. Search text is deliberately
/// absent: it narrows rendering only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchKey {
    pub resource: Resource,
    pub page: u64,
    pub page_size: PageSize,
    pub filter: Option<Filter>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct BrowseState {
    pub resource: Resource,
    pub query: QueryState,
    /// Items of the current page, as last reconciled.
    pub items: Vec<Item>,
    /// Total matching items across the collection.
    pub total: u64,
    pub phase: LoadPhase,
    /// Generation of the in-flight fetch; settlements carrying any other
    /// generation are dropped.
    pub inflight: Option<u64>,
}

impl UiState for BrowseState {}

impl BrowseState {
    pub fn new(resource: Resource, page_size: PageSize) -> Self {
        Self {
            resource,
            query: QueryState::with_page_size(page_size),
            ..Self::default()
        }
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.query.page_size)
    }

    pub fn fetch_key(&self) -> FetchKey {
        FetchKey {
            resource: self.resource,
            page: self.query.page,
            page_size: self.query.page_size,
            filter: self.query.filter.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

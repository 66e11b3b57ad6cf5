use crate::api::Item;
use crate::catalog::Resource;
use crate::query::{PageSize, Tab};
use crate::ui::mvi::Intent;

/// User actions and fetch settlements acting on [`super::BrowseState`].
#[derive(Clone, Debug, PartialEq)]
pub enum BrowseIntent {
    /// Switch to the other collection. Resets filter, search, tab, and
    /// page; page size is kept.
    SwitchResource(Resource),
    /// Go to a page. Out-of-range pages are ignored.
    SetPage(u64),
    /// Select a page size. Resets page to 1.
    SetPageSize(PageSize),
    /// Set the single active filter, replacing any other. A blank value
    /// clears instead. Resets page to 1 and the tab to ALL.
    SetFilter { field: String, value: String },
    /// Drop the active filter. Resets page to 1 and the tab to ALL.
    ClearFilter,
    /// Update the client-side search text. Never triggers a fetch.
    SetSearch(String),
    /// Select a category tab (products only; ignored elsewhere).
    SetTab(Tab),
    /// A fetch with this generation was started.
    FetchStarted { generation: u64 },
    /// A fetch settled successfully.
    FetchResolved {
        generation: u64,
        items: Vec<Item>,
        total: u64,
    },
    /// A fetch settled with an error. `message` is the display string.
    FetchFailed { generation: u64, message: String },
}

impl Intent for BrowseIntent {}

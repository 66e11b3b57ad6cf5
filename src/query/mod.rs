//! Query state: pagination, the single active filter, client-side search
//! text, and the category tab.

mod window;

pub use window::{page_window, PageWindow, MAX_VISIBLE_PAGES};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of selectable page sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
    ];

    pub fn as_u64(&self) -> u64 {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }

    pub fn from_u64(raw: u64) -> Option<Self> {
        match raw {
            5 => Some(PageSize::Five),
            10 => Some(PageSize::Ten),
            20 => Some(PageSize::Twenty),
            50 => Some(PageSize::Fifty),
            _ => None,
        }
    }

    /// Next size in the selector, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            PageSize::Five => PageSize::Ten,
            PageSize::Ten => PageSize::Twenty,
            PageSize::Twenty => PageSize::Fifty,
            PageSize::Fifty => PageSize::Five,
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.as_u64())
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u64::deserialize(deserializer)?;
        PageSize::from_u64(raw).ok_or_else(|| {
            D::Error::custom(format!(
                "page size must be one of 5, 10, 20, 50 (got {})",
                raw
            ))
        })
    }
}

/// The single active server-side filter. At most one exists at a time;
/// activating a new one replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub value: String,
}

impl Filter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Category tab for the products collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Laptops,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::All, Tab::Laptops];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "ALL",
            Tab::Laptops => "Laptops",
        }
    }

    /// Category slug this tab maps to, if any.
    pub fn category_slug(&self) -> Option<&'static str> {
        match self {
            Tab::All => None,
            Tab::Laptops => Some("laptops"),
        }
    }
}

/// Everything that describes what the user is currently asking for.
///
/// `search` is client-side only: it narrows the already-fetched page at
/// render time and never reaches the upstream API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub page: u64,
    pub page_size: PageSize,
    pub filter: Option<Filter>,
    pub search: String,
    pub tab: Tab,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            filter: None,
            search: String::new(),
            tab: Tab::default(),
        }
    }
}

impl QueryState {
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }
}

/// Number of pages needed to hold `total` items.
pub fn total_pages(total: u64, page_size: PageSize) -> u64 {
    total.div_ceil(page_size.as_u64())
}

use crate::api::ResultPage;
use crate::catalog::Resource;
use crate::fetch::FetchController;
use crate::query::PageSize;
use crate::ui::browse::{BrowseIntent, BrowseReducer, BrowseState};
use crate::ui::mvi::Reducer;

/// Which widget currently consumes typed characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing the selected filter field; every keystroke re-dispatches the
    /// filter, so the fetch follows the text as the user types.
    Filter,
    /// Editing the client-side search text.
    Search,
}

pub struct App {
    should_quit: bool,
    browse: BrowseState,
    mode: InputMode,
    /// Index into the current resource's filter fields.
    filter_slot: usize,
    search_open: bool,
    controller: FetchController,
    base_url: String,
}

impl App {
    pub fn new(
        controller: FetchController,
        resource: Resource,
        page_size: PageSize,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            should_quit: false,
            browse: BrowseState::new(resource, page_size),
            mode: InputMode::default(),
            filter_slot: 0,
            search_open: false,
            controller,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the initial fetch for the startup state.
    pub fn bootstrap(&mut self) {
        self.start_fetch();
    }

    pub fn browse(&self) -> &BrowseState {
        &self.browse
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn filter_slot(&self) -> usize {
        self.filter_slot
    }

    pub fn search_open(&self) -> bool {
        self.search_open
    }

    pub fn set_search_open(&mut self, open: bool) {
        self.search_open = open;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Run one intent through the reducer. If the fetch-relevant projection
    /// of the state changed, start a fetch for the new state.
    pub fn dispatch(&mut self, intent: BrowseIntent) {
        let before = self.browse.fetch_key();
        self.browse = BrowseReducer::reduce(std::mem::take(&mut self.browse), intent);
        if self.browse.fetch_key() != before {
            self.filter_slot = self
                .filter_slot
                .min(self.browse.resource.filter_fields().len().saturating_sub(1));
            self.start_fetch();
        }
    }

    pub fn on_settled(&mut self, generation: u64, result: Result<ResultPage, String>) {
        let intent = match result {
            Ok(page) => BrowseIntent::FetchResolved {
                generation,
                items: page.items,
                total: page.total,
            },
            Err(message) => BrowseIntent::FetchFailed {
                generation,
                message,
            },
        };
        self.dispatch(intent);
    }

    /// Move the filter field selection by `delta`, wrapping.
    pub fn move_filter_slot(&mut self, delta: isize) {
        let len = self.browse.resource.filter_fields().len();
        if len == 0 {
            return;
        }
        let slot = self.filter_slot as isize + delta;
        self.filter_slot = slot.rem_euclid(len as isize) as usize;
    }

    /// The filter value currently shown in the selected slot: the active
    /// filter's text when it targets this field, else empty.
    pub fn filter_text(&self) -> String {
        let field = self.selected_field();
        self.browse
            .query
            .filter
            .as_ref()
            .filter(|f| f.field == field)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    pub fn selected_field(&self) -> &'static str {
        let fields = self.browse.resource.filter_fields();
        fields[self.filter_slot.min(fields.len() - 1)].key
    }

    fn start_fetch(&mut self) {
        let generation = self
            .controller
            .start(self.browse.resource, &self.browse.query);
        self.browse = BrowseReducer::reduce(
            std::mem::take(&mut self.browse),
            BrowseIntent::FetchStarted { generation },
        );
    }
}

use crate::query::{Filter, QueryState, Tab};
use crate::ui::browse::intent::BrowseIntent;
use crate::ui::browse::state::{BrowseState, LoadPhase};
use crate::ui::mvi::Reducer;

pub struct BrowseReducer;

impl Reducer for BrowseReducer {
    type State = BrowseState;
    type Intent = BrowseIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowseIntent::SwitchResource(resource) => {
                if resource == state.resource {
                    return state;
                }
                BrowseState {
                    resource,
                    query: QueryState::with_page_size(state.query.page_size),
                    ..BrowseState::default()
                }
            }

            BrowseIntent::SetPage(page) => {
                if page >= 1 && page <= state.total_pages() {
                    state.query.page = page;
                }
                state
            }

            BrowseIntent::SetPageSize(page_size) => {
                if page_size != state.query.page_size {
                    state.query.page_size = page_size;
                    state.query.page = 1;
                }
                state
            }

            BrowseIntent::SetFilter { field, value } => {
                if value.trim().is_empty() {
                    return Self::reduce(state, BrowseIntent::ClearFilter);
                }
                state.query.filter = Some(Filter { field, value });
                state.query.tab = Tab::All;
                state.query.page = 1;
                state
            }

            BrowseIntent::ClearFilter => {
                state.query.filter = None;
                state.query.tab = Tab::All;
                state.query.page = 1;
                state
            }

            BrowseIntent::SetSearch(search) => {
                state.query.search = search;
                state
            }

            BrowseIntent::SetTab(tab) => {
                let Some(axis) = state.resource.category_axis() else {
                    return state;
                };
                if tab != state.query.tab {
                    state.query.filter = tab.category_slug().map(|slug| Filter::new(axis, slug));
                    state.query.tab = tab;
                    state.query.page = 1;
                }
                state
            }

            BrowseIntent::FetchStarted { generation } => {
                state.phase = LoadPhase::Loading;
                state.inflight = Some(generation);
                state
            }

            BrowseIntent::FetchResolved {
                generation,
                items,
                total,
            } => {
                if state.inflight == Some(generation) {
                    state.items = items;
                    state.total = total;
                    state.phase = LoadPhase::Ready;
                    state.inflight = None;
                }
                state
            }

            BrowseIntent::FetchFailed {
                generation,
                message,
            } => {
                if state.inflight == Some(generation) {
                    state.phase = LoadPhase::Failed(message);
                    state.inflight = None;
                }
                state
            }
        }
    }
}

//! Explicit "state changed, re-run fetch" controller.
//!
//! The UI runtime calls [`FetchController::start`] whenever the
//! fetch-relevant projection of the state changes. Each started fetch gets
//! a monotonically increasing generation; the settlement carries it back so
//! the reducer can drop responses that arrive out of order. In-flight
//! requests are never cancelled.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::ApiClient;
use crate::catalog::Resource;
use crate::query::QueryState;
use crate::ui::events::AppEvent;

pub struct FetchController {
    client: Arc<ApiClient>,
    runtime: Handle,
    events: Sender<AppEvent>,
    next_generation: u64,
}

impl FetchController {
    pub fn new(client: ApiClient, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            runtime,
            events,
            next_generation: 0,
        }
    }

    /// Start one fetch and return its generation. The settlement arrives
    /// later as [`AppEvent::FetchSettled`] on the UI event channel.
    pub fn start(&mut self, resource: Resource, query: &QueryState) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        let request_id = Uuid::new_v4();
        let client = Arc::clone(&self.client);
        let query = query.clone();
        let events = self.events.clone();

        self.runtime.spawn(async move {
            debug!(
                %request_id,
                generation,
                %resource,
                page = query.page,
                page_size = query.page_size.as_u64(),
                filter = query.filter.as_ref().map(|f| f.field.as_str()),
                "fetch started"
            );
            let result = match crate::fetch::run_fetch(&client, resource, &query).await {
                Ok(page) => {
                    debug!(%request_id, generation, total = page.total, "fetch resolved");
                    Ok(page)
                }
                Err(err) => {
                    warn!(%request_id, generation, error = %err, "fetch failed");
                    Err(err.display_message())
                }
            };
            // The receiver is gone only during shutdown.
            let _ = events.send(AppEvent::FetchSettled { generation, result });
        });

        generation
    }
}

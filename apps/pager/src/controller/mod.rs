//! Pagination controller: owns paging state, issues fetches, renders both regions.

pub mod commands;
pub mod events;
pub mod state;

use std::sync::Arc;

use client_core::{fetch_page, UsersSource};
use shared::{domain::PageNumber, error::FetchFailure};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, error, info, warn};

use crate::ui::{PageControl, PagerRegions, Renderer};

use self::{events::PagerEvent, state::PagingState};

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Rendered,
    Failed(FetchFailure),
    /// The page was fetched but its markup could not be produced.
    RenderFailed(String),
    /// A newer request superseded this one; nothing was applied.
    Stale,
    /// The activated control was disabled or already current.
    Ignored,
}

pub struct PagerController {
    source: Arc<dyn UsersSource>,
    regions: Arc<dyn PagerRegions>,
    renderer: Renderer,
    state: Mutex<PagingState>,
    events: broadcast::Sender<PagerEvent>,
}

impl PagerController {
    pub fn new(
        source: Arc<dyn UsersSource>,
        regions: Arc<dyn PagerRegions>,
        renderer: Renderer,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            source,
            regions,
            renderer,
            state: Mutex::new(PagingState::default()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<PagerEvent> {
        self.events.subscribe()
    }

    pub async fn state(&self) -> PagingState {
        self.state.lock().await.clone()
    }

    /// Loads whatever page is current; used on startup and for manual reloads.
    pub async fn reload(&self) -> LoadOutcome {
        let page = self.state.lock().await.current_page;
        self.load_page(page).await
    }

    /// Handles a click on a pagination control.
    pub async fn activate(&self, control: &PageControl) -> LoadOutcome {
        let current = self.state.lock().await.current_page;
        if !control.triggers_fetch(current) {
            debug!(
                target_page = control.target.get(),
                label = %control.label,
                "ignoring inert pagination control"
            );
            self.emit(PagerEvent::Ignored {
                target: control.target,
            });
            return LoadOutcome::Ignored;
        }

        let outcome = self.load_page(control.target).await;
        self.regions.scroll_to_top().await;
        outcome
    }

    pub async fn load_page(&self, page: PageNumber) -> LoadOutcome {
        let (seq, page_size) = {
            let mut state = self.state.lock().await;
            let seq = state.begin_request(page);
            match self.renderer.render_loading() {
                Ok(html) => self.regions.set_users(html).await,
                Err(err) => warn!(error = %err, "failed to render loading state"),
            }
            (seq, state.page_size)
        };
        self.emit(PagerEvent::Loading { seq, page });

        // The state lock is not held while the request is in flight.
        let result = fetch_page(self.source.as_ref(), page, page_size).await;

        let mut state = self.state.lock().await;
        if !state.is_latest(seq) {
            debug!(
                seq,
                page = page.get(),
                latest = state.latest_request,
                "discarding stale users response"
            );
            self.emit(PagerEvent::Stale { seq, page });
            return LoadOutcome::Stale;
        }

        match result {
            Ok(users_page) => {
                state.total_items = users_page.total;
                let rendered = self
                    .renderer
                    .render_users(&users_page.users)
                    .and_then(|users| Ok((users, self.renderer.render_pagination(&state, page)?)));
                let (users_html, pagination) = match rendered {
                    Ok(rendered) => rendered,
                    Err(err) => {
                        error!(page = page.get(), error = %err, "failed to render users page");
                        self.regions.set_users(String::new()).await;
                        self.regions.clear_pagination().await;
                        return LoadOutcome::RenderFailed(err.to_string());
                    }
                };
                self.regions.set_users(users_html).await;
                self.regions.set_pagination(pagination).await;
                info!(
                    page = page.get(),
                    users = users_page.users.len(),
                    total = ?users_page.total,
                    "rendered users page"
                );
                self.emit(PagerEvent::Loaded {
                    seq,
                    page,
                    users: users_page.users.len(),
                    total: users_page.total,
                });
                LoadOutcome::Rendered
            }
            Err(err) => {
                let failure = FetchFailure::from(err);
                error!(
                    page = page.get(),
                    kind = ?failure.kind,
                    error = %failure,
                    "failed to load users"
                );
                let html = self
                    .renderer
                    .render_error(&failure.message)
                    .unwrap_or_else(|err| {
                        warn!(error = %err, "failed to render error state");
                        String::new()
                    });
                self.regions.set_users(html).await;
                self.regions.clear_pagination().await;
                self.emit(PagerEvent::Failed {
                    seq,
                    page,
                    failure: failure.clone(),
                });
                LoadOutcome::Failed(failure)
            }
        }
    }

    fn emit(&self, event: PagerEvent) {
        // No subscribers is the normal case outside diagnostics and tests.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;

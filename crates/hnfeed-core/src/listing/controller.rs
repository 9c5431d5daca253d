//! Listing controller implementation.

use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::sync::{Mutex as AsyncMutex, watch};
use tracing::{debug, info, instrument, warn};

use crate::story::Story;
use crate::traits::{NavigationRequest, Navigator, StorySource};

use super::state::{ListingState, ListingStatus, Phase};
use super::timer::PollTimer;

/// Default period between incremental fetches.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Listing controller settings.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Period of the refresh timer.
    pub poll_interval: Duration,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// What a single fetch attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was appended and the cursor advanced.
    Appended { page: u32, count: usize },
    /// The fetch failed; the error was logged and state is unchanged.
    Failed { page: u32 },
    /// A timer tick found another fetch in flight and did nothing.
    Skipped,
    /// The response arrived after teardown and was dropped.
    Discarded { page: u32 },
    /// The controller was already torn down; no request was made.
    Inactive,
}

/// Fetches, accumulates and filters stories for one list screen.
///
/// Created with [`initialize`](Self::initialize), which starts the first fetch
/// and arms the refresh timer. [`teardown`](Self::teardown) stops the timer and
/// freezes the state; it also runs when the controller is dropped.
///
/// Fetches never overlap. A direct [`fetch_next_page`](Self::fetch_next_page)
/// call waits for any fetch in flight, while a timer tick that finds one in
/// flight is skipped.
pub struct ListingController<S, N> {
    shared: Arc<Shared<S, N>>,
    timer: Mutex<Option<PollTimer>>,
}

struct Shared<S, N> {
    source: S,
    navigator: N,
    inner: RwLock<Inner>,
    fetch_gate: AsyncMutex<()>,
    status: watch::Sender<ListingStatus>,
}

#[derive(Default)]
struct Inner {
    listing: ListingState,
    torn_down: bool,
    filter_revision: u64,
}

impl<S, N> ListingController<S, N>
where
    S: StorySource + 'static,
    N: Navigator + 'static,
{
    /// Create a fresh listing, fetch the first page and arm the refresh timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn initialize(source: S, navigator: N, config: ListingConfig) -> Self {
        let (status, _) = watch::channel(ListingStatus::initial());

        let shared = Arc::new(Shared {
            source,
            navigator,
            inner: RwLock::new(Inner::default()),
            fetch_gate: AsyncMutex::new(()),
            status,
        });

        info!(interval = ?config.poll_interval, "Listing initialized");

        let first = Arc::clone(&shared);
        let ticking = Arc::clone(&shared);
        let timer = PollTimer::arm(
            config.poll_interval,
            move || async move {
                first.fetch_next_page().await;
            },
            move || {
                let shared = Arc::clone(&ticking);
                async move {
                    shared.tick().await;
                }
            },
        );

        Self {
            shared,
            timer: Mutex::new(Some(timer)),
        }
    }
}

impl<S, N> ListingController<S, N>
where
    S: StorySource,
{
    /// Fetch the page at the cursor and append it.
    ///
    /// Failures are logged and swallowed; the returned outcome says what
    /// happened.
    pub async fn fetch_next_page(&self) -> FetchOutcome {
        self.shared.fetch_next_page().await
    }
}

impl<S, N> ListingController<S, N>
where
    N: Navigator,
{
    /// Ask the navigator to show `story` on the details screen.
    pub fn activate_record(&self, story: &Story) {
        debug!(title = %story.title, "Story activated");
        self.shared
            .navigator
            .navigate(NavigationRequest::details(story.clone()));
    }

    /// Activate the story at `index` in the derived view.
    ///
    /// Returns false if there is no such story.
    pub fn activate_visible(&self, index: usize) -> bool {
        let story = {
            let inner = self.shared.read();
            inner.listing.derived_view().get(index).map(|s| (*s).clone())
        };

        match story {
            Some(story) => {
                self.activate_record(&story);
                true
            }
            None => false,
        }
    }
}

impl<S, N> ListingController<S, N> {
    /// Replace the filter text.
    pub fn set_filter_text(&self, text: impl Into<String>) {
        let text = text.into();
        {
            let mut inner = self.shared.write();
            if inner.torn_down {
                debug!("Filter change after teardown ignored");
                return;
            }
            inner.listing.filter_text = text;
            inner.filter_revision += 1;
        }
        self.shared.publish();
    }

    /// The stories passing the current filter, in arrival order.
    pub fn derived_view(&self) -> Vec<Story> {
        let inner = self.shared.read();
        inner
            .listing
            .derived_view()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Stop the timer and freeze the state.
    ///
    /// Only the first call does anything.
    pub fn teardown(&self) {
        {
            let mut inner = self.shared.write();
            if inner.torn_down {
                return;
            }
            inner.torn_down = true;
        }

        let timer = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(timer) = timer {
            timer.cancel();
        }

        self.shared.publish();
        info!("Listing torn down");
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.shared.read().phase()
    }

    /// Next page the controller will request.
    pub fn page(&self) -> u32 {
        self.shared.read().listing.page
    }

    /// Every story fetched so far.
    pub fn records(&self) -> Vec<Story> {
        self.shared.read().listing.records.clone()
    }

    /// Current filter text.
    pub fn filter_text(&self) -> String {
        self.shared.read().listing.filter_text.clone()
    }

    /// A consistent copy of the whole state.
    pub fn snapshot(&self) -> ListingState {
        self.shared.read().listing.clone()
    }

    /// Watch for state changes.
    pub fn subscribe(&self) -> watch::Receiver<ListingStatus> {
        self.shared.status.subscribe()
    }
}

impl<S, N> Drop for ListingController<S, N> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<S, N> std::fmt::Debug for ListingController<S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.shared.inner.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ListingController")
            .field("phase", &inner.phase())
            .field("page", &inner.listing.page)
            .field("records", &inner.listing.records.len())
            .field("filter_text", &inner.listing.filter_text)
            .finish()
    }
}

impl Inner {
    fn phase(&self) -> Phase {
        if self.torn_down {
            Phase::Inactive
        } else {
            Phase::Active
        }
    }

    fn status(&self) -> ListingStatus {
        ListingStatus {
            phase: self.phase(),
            page: self.listing.page,
            records: self.listing.records.len(),
            filter_revision: self.filter_revision,
        }
    }
}

impl<S, N> Shared<S, N>
where
    S: StorySource,
{
    async fn fetch_next_page(&self) -> FetchOutcome {
        let _gate = self.fetch_gate.lock().await;
        self.fetch_gated().await
    }

    async fn tick(&self) -> FetchOutcome {
        match self.fetch_gate.try_lock() {
            Ok(_gate) => self.fetch_gated().await,
            Err(_) => {
                debug!("Fetch already in flight, skipping tick");
                FetchOutcome::Skipped
            }
        }
    }

    #[instrument(skip(self))]
    async fn fetch_gated(&self) -> FetchOutcome {
        let page = {
            let inner = self.read();
            if inner.torn_down {
                return FetchOutcome::Inactive;
            }
            inner.listing.page
        };

        debug!(page, "Fetching page");

        match self.source.fetch_page(page).await {
            Ok(result) => self.append(page, result.hits),
            Err(e) => {
                warn!(page, error = %e, "Failed to fetch page");
                FetchOutcome::Failed { page }
            }
        }
    }

    fn append(&self, page: u32, hits: Vec<Story>) -> FetchOutcome {
        let count = hits.len();
        {
            let mut inner = self.write();
            if inner.torn_down {
                debug!(page, "Discarding page fetched after teardown");
                return FetchOutcome::Discarded { page };
            }
            inner.listing.records.extend(hits);
            inner.listing.page += 1;
        }

        debug!(page, count, "Appended page");
        self.publish();
        FetchOutcome::Appended { page, count }
    }
}

impl<S, N> Shared<S, N> {
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self) {
        let status = self.read().status();
        self.status.send_replace(status);
    }
}

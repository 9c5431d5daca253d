//! Navigation boundary.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

use crate::story::Story;

/// Screens a navigation request can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// The raw record view.
    Details,
}

/// Parameters handed to the details screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailsParams {
    /// The full record, exactly as held by the listing.
    pub data: Story,
}

/// A request to show another screen.
///
/// Serializes as `{"screen":"Details","params":{"data":{...}}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub screen: Screen,
    pub params: DetailsParams,
}

impl NavigationRequest {
    /// A request to show `story` on the details screen.
    pub fn details(story: Story) -> Self {
        Self {
            screen: Screen::Details,
            params: DetailsParams { data: story },
        }
    }

    /// The story being navigated to.
    pub fn story(&self) -> &Story {
        &self.params.data
    }
}

/// Receives navigation requests emitted by the listing.
pub trait Navigator: Send + Sync {
    /// Handle one navigation request.
    fn navigate(&self, request: NavigationRequest);
}

impl Navigator for mpsc::UnboundedSender<NavigationRequest> {
    fn navigate(&self, request: NavigationRequest) {
        if self.send(request).is_err() {
            debug!("Navigation receiver dropped, request ignored");
        }
    }
}

//! Fire-and-forget image requests reported over a channel.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::application::dto::ImageLoadedEvent;
use crate::application::use_cases::AcquireImageUseCase;

/// Spawns one acquisition task per request and reports the outcome.
///
/// Requests are neither de-duplicated nor throttled, and a spawned task
/// runs to completion even if nobody is listening any more. Retrying is
/// done by calling [`request`](Self::request) again.
pub struct ImageRequestService {
    acquire: AcquireImageUseCase,
    event_tx: mpsc::UnboundedSender<ImageLoadedEvent>,
}

impl ImageRequestService {
    /// Creates a service reporting to `event_tx`.
    #[must_use]
    pub const fn new(
        acquire: AcquireImageUseCase,
        event_tx: mpsc::UnboundedSender<ImageLoadedEvent>,
    ) -> Self {
        Self { acquire, event_tx }
    }

    /// Starts acquiring `url`; the result arrives as an [`ImageLoadedEvent`].
    pub fn request(&self, url: impl Into<String>) -> JoinHandle<()> {
        let url = url.into();
        let acquire = self.acquire.clone();
        let event_tx = self.event_tx.clone();

        trace!(url = %url, "Image requested");
        tokio::spawn(async move {
            let result = acquire.execute(&url).await;
            if event_tx.send(ImageLoadedEvent { url, result }).is_err() {
                debug!("Image event receiver dropped");
            }
        })
    }

    /// Starts acquiring every URL in `urls`.
    pub fn request_all<I, S>(&self, urls: I) -> Vec<JoinHandle<()>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        urls.into_iter().map(|url| self.request(url)).collect()
    }
}

//! Streaming event types for incremental chat responses.

use std::pin::Pin;

use futures::Stream;
use tokio_util::sync::CancellationToken;

/// An event emitted while a chat answer streams in.
///
/// Events arrive in transport order. A stream emits at most one terminal
/// event ([`Done`](Self::Done) or [`Error`](Self::Error)), and nothing after
/// it. A cancelled stream may end without any terminal event at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// An incremental piece of the answer text.
    Fragment(String),
    /// The server signalled successful end of stream.
    Done,
    /// The stream failed mid-flight; no further events follow.
    Error(String),
}

impl StreamEvent {
    /// Whether this event ends the stream.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Error(_))
    }
}

/// Handle to a live chat stream.
///
/// Consume `events` with `StreamExt::next()`. Call [`cancel`](Self::cancel)
/// (or hand out a [`canceller`](Self::canceller)) to stop the stream early:
/// chunks still in flight are discarded and no further events are emitted.
///
/// One handle per stream; handles are never shared between streams.
pub struct StreamHandle {
    /// The stream of events.
    pub events: Pin<Box<dyn Stream<Item = StreamEvent> + Send>>,
    cancel: CancellationToken,
}

impl std::fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamHandle")
            .field("events", &"<stream>")
            .field("cancel", &self.cancel)
            .finish()
    }
}

impl StreamHandle {
    /// Wrap an event stream and its cancellation token.
    #[must_use]
    pub fn new(
        events: Pin<Box<dyn Stream<Item = StreamEvent> + Send>>,
        cancel: CancellationToken,
    ) -> Self {
        Self { events, cancel }
    }

    /// Cancel the stream.
    ///
    /// Idempotent, and a no-op once the stream has already reached a terminal
    /// state. The read loop observes cancellation at the next chunk boundary,
    /// so a chunk already being processed is not interrupted.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A clonable canceller for stopping the stream from elsewhere
    /// (e.g. while another task owns the handle and is consuming events).
    #[must_use]
    pub fn canceller(&self) -> StreamCanceller {
        StreamCanceller(self.cancel.clone())
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Cancels an associated [`StreamHandle`] from anywhere.
#[derive(Clone)]
pub struct StreamCanceller(CancellationToken);

impl StreamCanceller {
    /// Cancel the associated stream. Idempotent.
    pub fn cancel(&self) {
        self.0.cancel();
    }
}

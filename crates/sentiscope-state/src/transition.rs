//! Outcome of applying one event to a controller.

/// What happened when an event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<R> {
    /// State changed and the caller must issue `R`, then feed its result back.
    Request(R),
    /// State changed and there is nothing to issue (a completion or a close).
    Applied,
    /// The event was valid but changed nothing that needs a fetch.
    Unchanged,
    /// The event was rejected as a no-op (empty query, retry while closed).
    Ignored,
    /// A completion arrived for a superseded request and was discarded.
    Stale,
}

impl<R> Transition<R> {
    pub fn request(self) -> Option<R> {
        match self {
            Transition::Request(request) => Some(request),
            _ => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Transition::Stale)
    }
}

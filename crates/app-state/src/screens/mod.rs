//! Per-screen controllers.
//!
//! Each AI request is stamped with a [`RequestTicket`]. A controller only
//! applies a result whose ticket is the one it is waiting for; anything else
//! (a superseded request, or one issued before the screen was unmounted) is
//! dropped.

mod chat;
mod farm;
mod pest;

pub use chat::ChatScreen;
pub use farm::FarmScreen;
pub use pest::{ImageUpload, PestScreen};

/// Identifies one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// A request a controller wants dispatched.
#[derive(Debug, Clone)]
pub struct PendingRequest<T> {
    pub ticket: RequestTicket,
    pub payload: T,
}

/// Generation counter for a controller. Never goes backwards, even across
/// resets, so stale tickets can never match a fresh request.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    generation: u64,
    awaiting: Option<u64>,
}

impl InFlight {
    pub(crate) fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.awaiting = Some(self.generation);
        RequestTicket(self.generation)
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Accept `ticket` if it is the awaited one.
    pub(crate) fn settle(&mut self, ticket: RequestTicket) -> bool {
        if self.awaiting == Some(ticket.0) {
            self.awaiting = None;
            true
        } else {
            tracing::debug!(
                ticket = ticket.0,
                awaiting = ?self.awaiting,
                "Dropping stale result"
            );
            false
        }
    }

    /// Forget any in-flight request.
    pub(crate) fn invalidate(&mut self) {
        self.generation += 1;
        self.awaiting = None;
    }
}

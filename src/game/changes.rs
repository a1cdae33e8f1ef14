use tracing::debug;

use super::{Match, PollerId, Table};

impl Table {
    fn subscribe(&mut self) -> PollerId {
        let poller = PollerId(self.next_poller);
        self.next_poller = self.next_poller.wrapping_add(1).max(1);
        self.watermarks.insert(poller, self.version);
        debug!(%poller, version = self.version, "poller subscribed");
        poller
    }

    fn poll_changed(&mut self, poller: PollerId) -> bool {
        let version = self.version;
        match self.watermarks.get_mut(&poller) {
            Some(seen) if version > *seen => {
                *seen = version;
                true
            }
            _ => false,
        }
    }
}

impl Match {
    /// Registers a new observer of match changes.
    ///
    /// The observer starts out up to date: its first
    /// [`poll_changed`](Match::poll_changed) only reports changes made after
    /// this call.
    pub fn subscribe(&self) -> PollerId {
        self.table.with(Table::subscribe)
    }

    /// Forgets an observer. Returns whether it was registered.
    ///
    /// [`PollerId::DEFAULT`] cannot be forgotten.
    pub fn unsubscribe(&self, poller: PollerId) -> bool {
        if poller == PollerId::DEFAULT {
            return false;
        }
        self.table
            .with(|table| table.watermarks.remove(&poller).is_some())
    }

    /// Returns `true` once if anything changed since `poller` last asked.
    ///
    /// Several changes between two polls are reported as one, and a change
    /// is never reported twice to the same poller. Pollers that were never
    /// subscribed, or have unsubscribed, always get `false`.
    pub fn poll_changed(&self, poller: PollerId) -> bool {
        self.table.with(|table| table.poll_changed(poller))
    }

    /// [`Match::poll_changed`] for the built-in default poller.
    pub fn consume_change_flag(&self) -> bool {
        self.poll_changed(PollerId::DEFAULT)
    }

    /// Returns the current change version.
    pub fn version(&self) -> u64 {
        self.table.with(|table| table.version)
    }
}

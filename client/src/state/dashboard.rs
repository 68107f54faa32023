//! Manager dashboard list state.
//!
//! DESIGN
//! ======
//! Page-local: created when the dashboard mounts and dropped when it unmounts.
//! Deletions edit the loaded list in place instead of refetching, and only one
//! venue can be mid-delete at a time.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use api::{Booking, Venue};
use stays::dashboard::{remove_venue, sort_by_start};

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub venues: Vec<Venue>,
    pub bookings: Vec<Booking>,
    pub loading: bool,
    pub deleting_id: Option<String>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Store both lists; bookings are ordered by start date.
    pub fn loaded(&mut self, venues: Vec<Venue>, mut bookings: Vec<Booking>) {
        sort_by_start(&mut bookings);
        self.venues = venues;
        self.bookings = bookings;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Mark `id` as deleting. Returns `false` if another delete is running.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.deleting_id.is_some() {
            return false;
        }
        self.deleting_id = Some(id.to_owned());
        true
    }

    /// Settle a delete. On success the venue leaves the list.
    pub fn finish_delete(&mut self, id: &str, succeeded: bool) {
        if succeeded {
            remove_venue(&mut self.venues, id);
        }
        if self.deleting_id.as_deref() == Some(id) {
            self.deleting_id = None;
        }
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting_id.as_deref() == Some(id)
    }
}

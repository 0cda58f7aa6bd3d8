//! In-memory seat ledger using a Tokio mutex for single-process deployments.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;

use seathub_core::result::AppResult;
use seathub_entity::registration::{NewSignup, Registration};
use seathub_entity::waitlist::WaitlistEntry;
use seathub_entity::workshop::SeatAvailability;

use super::{SeatClaim, SeatLedger};

#[derive(Debug, Default)]
struct InnerState {
    registrations: Vec<Registration>,
    waitlist: Vec<WaitlistEntry>,
    next_waitlist_id: i64,
}

/// In-memory seat ledger.
///
/// Contents live as long as the process. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemorySeatLedger {
    state: Arc<Mutex<InnerState>>,
}

impl MemorySeatLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeatLedger for MemorySeatLedger {
    async fn registered_count(&self) -> AppResult<u64> {
        let state = self.state.lock().await;
        Ok(state.registrations.len() as u64)
    }

    async fn claim_seat(&self, signup: NewSignup, total_seats: u32) -> AppResult<SeatClaim> {
        let mut state = self.state.lock().await;

        let availability =
            SeatAvailability::from_count(total_seats, state.registrations.len() as u64);

        if availability.has_free_seat() {
            let registration = Registration::from_signup(&signup);
            state.registrations.push(registration.clone());

            let seats_remaining = availability.after_claim().seats_remaining;
            info!(
                registration_id = %registration.id,
                seats_remaining,
                "Seat registered"
            );
            return Ok(SeatClaim::Registered {
                registration,
                seats_remaining,
            });
        }

        state.next_waitlist_id += 1;
        let entry = WaitlistEntry {
            id: state.next_waitlist_id,
            name: signup.name,
            email: signup.email,
            created_at: Utc::now(),
        };
        state.waitlist.push(entry.clone());
        info!(waitlist_id = entry.id, "Workshop full, sign-up waitlisted");

        Ok(SeatClaim::Waitlisted { entry })
    }

    async fn list_registrations(&self) -> AppResult<Vec<Registration>> {
        Ok(self.state.lock().await.registrations.clone())
    }

    async fn list_waitlist(&self) -> AppResult<Vec<WaitlistEntry>> {
        Ok(self.state.lock().await.waitlist.clone())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

//! Seat availability derived from the registration count.

use serde::{Deserialize, Serialize};

/// Snapshot of how many seats are left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAvailability {
    /// Fixed workshop capacity.
    pub total_seats: u32,
    /// `max(0, total_seats - registered)`.
    pub seats_remaining: u32,
}

impl SeatAvailability {
    /// Derive availability from the number of stored registrations.
    ///
    /// Counts above capacity clamp to zero remaining seats.
    pub fn from_count(total_seats: u32, registered: u64) -> Self {
        let remaining = u64::from(total_seats).saturating_sub(registered);
        Self {
            total_seats,
            // remaining <= total_seats, so the conversion cannot truncate
            seats_remaining: u32::try_from(remaining).unwrap_or(0),
        }
    }

    /// Whether another registration can be accepted.
    pub fn has_free_seat(&self) -> bool {
        self.seats_remaining > 0
    }

    /// Availability after one more seat is taken.
    pub fn after_claim(&self) -> Self {
        Self {
            total_seats: self.total_seats,
            seats_remaining: self.seats_remaining.saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_for_counts_up_to_capacity() {
        for count in 0..=20u64 {
            let availability = SeatAvailability::from_count(20, count);
            assert_eq!(u64::from(availability.seats_remaining), 20 - count);
        }
    }

    #[test]
    fn test_remaining_clamps_above_capacity() {
        for count in [21u64, 25, 1_000] {
            assert_eq!(SeatAvailability::from_count(20, count).seats_remaining, 0);
        }
    }

    #[test]
    fn test_after_claim() {
        let availability = SeatAvailability::from_count(20, 19);
        assert!(availability.has_free_seat());
        let after = availability.after_claim();
        assert_eq!(after.seats_remaining, 0);
        assert!(!after.has_free_seat());
        assert_eq!(after.after_claim().seats_remaining, 0);
    }
}

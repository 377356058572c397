//! In-memory storage implementation

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

use crate::domain::{Booking, BookingPatch, BookingRepository, DomainResult, NewBooking};

/// In-memory repository for development and testing
///
/// Ids minted here have the same object-id shape as the MongoDB ones, so
/// the handler-level id checks behave identically against either backend.
pub struct InMemoryBookingRepository {
    bookings: DashMap<String, StoredBooking>,
    sequence: AtomicU64,
}

struct StoredBooking {
    // insertion order, so find_all matches Mongo's natural order
    seq: u64,
    booking: Booking,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self {
            bookings: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    fn matching<F>(&self, predicate: F) -> Vec<Booking>
    where
        F: Fn(&Booking) -> bool,
    {
        let mut matches: Vec<(u64, Booking)> = self
            .bookings
            .iter()
            .filter(|entry| predicate(&entry.booking))
            .map(|entry| (entry.seq, entry.booking.clone()))
            .collect();
        matches.sort_by_key(|(seq, _)| *seq);
        matches.into_iter().map(|(_, booking)| booking).collect()
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        Ok(self.matching(|_| true))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.get(id).map(|entry| entry.booking.clone()))
    }

    async fn insert(&self, booking: NewBooking) -> DomainResult<Booking> {
        let id = ObjectId::new().to_hex();
        let booking = Booking {
            id: id.clone(),
            name: booking.name,
            email: booking.email,
            event: booking.event,
            ticket_type: booking.ticket_type,
        };
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        self.bookings.insert(
            id,
            StoredBooking {
                seq,
                booking: booking.clone(),
            },
        );
        Ok(booking)
    }

    async fn update(&self, id: &str, patch: BookingPatch) -> DomainResult<Option<Booking>> {
        let Some(mut entry) = self.bookings.get_mut(id) else {
            return Ok(None);
        };
        entry.booking = patch.apply(entry.booking.clone());
        Ok(Some(entry.booking.clone()))
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        Ok(self.bookings.remove(id).is_some())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Vec<Booking>> {
        Ok(self.matching(|booking| booking.email == email))
    }

    async fn find_by_event(&self, event: &str) -> DomainResult<Vec<Booking>> {
        Ok(self.matching(|booking| booking.event == event))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{is_well_formed_id, DEFAULT_TICKET_TYPE};

    fn new_booking(name: &str, email: &str, event: &str) -> NewBooking {
        NewBooking {
            name: name.to_string(),
            email: email.to_string(),
            event: event.to_string(),
            ticket_type: DEFAULT_TICKET_TYPE.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_a_well_formed_id() {
        let repo = InMemoryBookingRepository::new();
        let created = repo
            .insert(new_booking("Ada", "ada@x.com", "Expo"))
            .await
            .unwrap();
        assert!(is_well_formed_id(&created.id));
        assert_eq!(created.name, "Ada");

        let fetched = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let repo = InMemoryBookingRepository::new();
        for name in ["first", "second", "third"] {
            repo.insert(new_booking(name, "a@x.com", "Expo"))
                .await
                .unwrap();
        }
        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn update_merges_only_provided_fields() {
        let repo = InMemoryBookingRepository::new();
        let created = repo
            .insert(new_booking("Ada", "ada@x.com", "Expo"))
            .await
            .unwrap();

        let patch = BookingPatch {
            ticket_type: Some("VIP".to_string()),
            ..Default::default()
        };
        let updated = repo.update(&created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.ticket_type, "VIP");
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.email, "ada@x.com");
        assert_eq!(updated.event, "Expo");
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let repo = InMemoryBookingRepository::new();
        let result = repo
            .update("652f8c0012ab34cd56ef7890", BookingPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_removes_the_booking() {
        let repo = InMemoryBookingRepository::new();
        let created = repo
            .insert(new_booking("Ada", "ada@x.com", "Expo"))
            .await
            .unwrap();

        assert!(repo.delete(&created.id).await.unwrap());
        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), None);
        assert!(!repo.delete(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn find_by_email_returns_exact_matches() {
        let repo = InMemoryBookingRepository::new();
        repo.insert(new_booking("Ada", "ada@x.com", "Expo"))
            .await
            .unwrap();
        repo.insert(new_booking("Grace", "grace@x.com", "Expo"))
            .await
            .unwrap();
        repo.insert(new_booking("Ada 2", "ada@x.com", "Summit"))
            .await
            .unwrap();

        let matches = repo.find_by_email("ada@x.com").await.unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|b| b.email == "ada@x.com"));

        assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_event_returns_exact_matches() {
        let repo = InMemoryBookingRepository::new();
        repo.insert(new_booking("Ada", "ada@x.com", "Expo"))
            .await
            .unwrap();
        repo.insert(new_booking("Grace", "grace@x.com", "Summit"))
            .await
            .unwrap();

        let matches = repo.find_by_event("Summit").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Grace");
    }
}

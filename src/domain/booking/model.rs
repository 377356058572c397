//! Booking domain entity

/// Ticket type applied when a booking is created without one
pub const DEFAULT_TICKET_TYPE: &str = "General";

/// A booking for an event
///
/// The id is assigned by the storage layer on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub event: String,
    pub ticket_type: String,
}

/// Payload for creating a booking; the id is assigned by storage
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub event: String,
    pub ticket_type: String,
}

/// Partial update for a booking
///
/// Absent fields keep their previous values.
#[derive(Debug, Clone, Default)]
pub struct BookingPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub event: Option<String>,
    pub ticket_type: Option<String>,
}

impl BookingPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.event.is_none()
            && self.ticket_type.is_none()
    }

    /// Merge the patch into an existing booking, field-wise
    pub fn apply(self, existing: Booking) -> Booking {
        Booking {
            id: existing.id,
            name: self.name.unwrap_or(existing.name),
            email: self.email.unwrap_or(existing.email),
            event: self.event.unwrap_or(existing.event),
            ticket_type: self.ticket_type.unwrap_or(existing.ticket_type),
        }
    }
}

/// Whether `id` has the shape of a storage-assigned booking id
/// (24 hex characters, the document store's object id format).
///
/// A malformed id is reported as a validation failure; 404 is reserved
/// for well-formed ids that match no record.
pub fn is_well_formed_id(id: &str) -> bool {
    id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

// ── Tests ──────────────────────────────────────────────────────

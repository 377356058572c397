pub mod model;
pub mod repository;

pub use model::{is_well_formed_id, Booking, BookingPatch, NewBooking, DEFAULT_TICKET_TYPE};
pub use repository::BookingRepository;

pub mod dto;

pub use dto::{is_slot_disabled, BookingRequest, TimeSlot, TIME_SLOTS};

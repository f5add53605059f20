//! Public, unauthenticated pages: the marketing homepage with the booking
//! widget and the customer-facing quotation view.

pub mod booking_widget;
pub mod compare_slider;
pub mod home;
pub mod quotation;

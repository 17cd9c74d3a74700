pub mod action;
pub mod booking;
pub mod service;
pub mod session;

pub use action::{CallbackAction, PageNav};
pub use booking::{Booking, BookingDraft};
pub use service::{Service, ServiceCategory};
pub use session::BookingDialog;

//! Entity models for the hotel management API
//!
//! Each entity comes as a triple: the full record (server-assigned `id`
//! included), a `XxxCreate` payload (record minus server-assigned
//! fields) and a `XxxUpdate` payload (every mutable field optional;
//! omitted fields are left unchanged server-side).

mod booking;
mod guest;
mod payment;
mod room;
mod staff;

pub use booking::{Booking, BookingCreate, BookingStatus, BookingUpdate};
pub use guest::{Guest, GuestCreate, GuestUpdate};
pub use payment::{Payment, PaymentCreate, PaymentStatus, PaymentUpdate};
pub use room::{
    CleaningStatus, MaintenanceStatus, Room, RoomCreate, RoomStatus, RoomType, RoomUpdate,
};
pub use staff::{Staff, StaffCreate, StaffStatus, StaffUpdate};

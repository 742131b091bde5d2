pub mod time_slot;
pub mod delivery;
pub mod address;

pub use time_slot::TimeSlot;
pub use delivery::{
    BookingWindow, DeliveryMode, DeliverySelection, Effects, PickerPhase, SelectionEvent, SlotQuery,
    BOOKING_HORIZON_DAYS,
};
pub use address::DeliveryAddress;

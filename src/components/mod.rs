pub mod app;
pub mod slot_grid;
pub mod scheduled_delivery_picker;
pub mod address_capsule;

pub use app::{App, CheckoutPage};
pub use slot_grid::SlotGrid;
pub use scheduled_delivery_picker::ScheduledDeliveryPicker;
pub use address_capsule::AddressCapsule;

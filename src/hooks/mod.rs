pub mod delivery_context;
pub mod use_scheduled_delivery;

pub use delivery_context::{use_delivery_context, DeliveryContext, DeliveryContextProvider};
pub use use_scheduled_delivery::{use_scheduled_delivery, UseScheduledDeliveryHandle};

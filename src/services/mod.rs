pub mod api_client;

pub use api_client::{parse_time_slots, ApiClient};

// Utils compartidos

pub mod storage;
pub mod cookies;

pub use storage::*;
pub use cookies::*;

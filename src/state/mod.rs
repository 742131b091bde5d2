// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod address_state;

pub use reactivity::*;
pub use address_state::*;

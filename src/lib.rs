// ============================================================================
// STOREFRONT PWA - SELECTOR DE ENTREGA PROGRAMADA (RUST + YEW)
// ============================================================================
// - Models: Estructuras compartidas con el backend
// - Services: SOLO comunicación API
// - ViewModels: Estado + lógica UI (sin DOM)
// - State: Stores compartidos con Rc<RefCell> + subscribers
// - Hooks / Components: Yew
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod hooks;
pub mod components;
pub mod utils;

pub use components::App;
pub use errors::SlotError;

pub mod delivery_viewmodel;
pub mod slot_grid;

pub use delivery_viewmodel::DeliveryViewModel;
pub use slot_grid::{build_slot_grid, SlotCell, SlotCellState, SlotGridView};

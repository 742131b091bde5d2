// Renderizado puro de la grilla de horarios (sin estado propio)

use crate::models::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCellState {
    Selectable,
    Selected,
    Disabled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotCell {
    pub slot: TimeSlot,
    pub label: String,
    pub state: SlotCellState,
    /// Motivo si está deshabilitado, capacidad restante si está disponible
    pub note: Option<String>,
}

impl SlotCell {
    pub fn is_selectable(&self) -> bool {
        self.state != SlotCellState::Disabled
    }

    pub fn class(&self) -> &'static str {
        match self.state {
            SlotCellState::Selectable => "slot-cell",
            SlotCellState::Selected => "slot-cell selected",
            SlotCellState::Disabled => "slot-cell disabled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotGridView {
    Empty,
    Cells(Vec<SlotCell>),
}

pub fn build_slot_grid(slots: &[TimeSlot], selected_time: Option<&str>) -> SlotGridView {
    if slots.is_empty() {
        return SlotGridView::Empty;
    }

    let cells = slots
        .iter()
        .map(|slot| {
            let (state, note) = if slot.available {
                let state = if selected_time == Some(slot.time.as_str()) {
                    SlotCellState::Selected
                } else {
                    SlotCellState::Selectable
                };
                (state, slot.remaining_capacity.map(capacity_note))
            } else {
                (SlotCellState::Disabled, slot.reason.clone())
            };
            SlotCell {
                slot: slot.clone(),
                label: slot.label(),
                state,
                note,
            }
        })
        .collect();

    SlotGridView::Cells(cells)
}

fn capacity_note(remaining: u32) -> String {
    match remaining {
        1 => "Queda 1".to_string(),
        n => format!("Quedan {}", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_slots() -> Vec<TimeSlot> {
        vec![
            TimeSlot {
                time: "2026-10-19T12:00:00Z".to_string(),
                display: "12:00".to_string(),
                available: true,
                reason: None,
                remaining_capacity: Some(3),
            },
            TimeSlot {
                time: "2026-10-19T12:30:00Z".to_string(),
                display: "12:30".to_string(),
                available: false,
                reason: Some("closed".to_string()),
                remaining_capacity: None,
            },
        ]
    }

    #[test]
    fn test_available_and_closed_slots() {
        let SlotGridView::Cells(cells) = build_slot_grid(&backend_slots(), None) else {
            panic!("se esperaban celdas");
        };
        assert_eq!(cells.len(), 2);

        assert!(cells[0].is_selectable());
        assert_eq!(cells[0].note.as_deref(), Some("Quedan 3"));

        assert!(!cells[1].is_selectable());
        assert_eq!(cells[1].state, SlotCellState::Disabled);
        assert_eq!(cells[1].note.as_deref(), Some("closed"));
    }

    #[test]
    fn test_selected_slot_is_marked() {
        let view = build_slot_grid(&backend_slots(), Some("2026-10-19T12:00:00Z"));
        let SlotGridView::Cells(cells) = view else {
            panic!("se esperaban celdas");
        };
        assert_eq!(cells[0].state, SlotCellState::Selected);
        assert_eq!(cells[0].class(), "slot-cell selected");
    }

    #[test]
    fn test_disabled_slot_never_shows_selected() {
        let view = build_slot_grid(&backend_slots(), Some("2026-10-19T12:30:00Z"));
        let SlotGridView::Cells(cells) = view else {
            panic!("se esperaban celdas");
        };
        assert_eq!(cells[1].state, SlotCellState::Disabled);
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(build_slot_grid(&[], None), SlotGridView::Empty);
    }

    #[test]
    fn test_capacity_note_singular() {
        assert_eq!(capacity_note(1), "Queda 1");
    }
}

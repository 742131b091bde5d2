use yew::prelude::*;

use crate::models::TimeSlot;
use crate::viewmodels::{build_slot_grid, SlotCellState, SlotGridView};

#[derive(Properties, PartialEq)]
pub struct SlotGridProps {
    pub slots: Vec<TimeSlot>,
    #[prop_or_default]
    pub selected_time: Option<String>,
    pub on_select: Callback<TimeSlot>,
}

#[function_component(SlotGrid)]
pub fn slot_grid(props: &SlotGridProps) -> Html {
    let cells = match build_slot_grid(&props.slots, props.selected_time.as_deref()) {
        SlotGridView::Empty => {
            return html! {
                <p class="slot-grid-empty">{"No hay horarios disponibles para este día"}</p>
            };
        }
        SlotGridView::Cells(cells) => cells,
    };

    html! {
        <div class="slot-grid" role="listbox">
            { for cells.into_iter().map(|cell| {
                let selectable = cell.is_selectable();
                let onclick = {
                    let on_select = props.on_select.clone();
                    let slot = cell.slot.clone();
                    Callback::from(move |_: MouseEvent| {
                        if selectable {
                            on_select.emit(slot.clone());
                        }
                    })
                };
                html! {
                    <button
                        key={cell.slot.time.clone()}
                        type="button"
                        class={cell.class()}
                        disabled={!selectable}
                        aria-selected={(cell.state == SlotCellState::Selected).to_string()}
                        onclick={onclick}
                    >
                        <span class="slot-time">{cell.label.clone()}</span>
                        if let Some(note) = cell.note.clone() {
                            <span class="slot-note">{note}</span>
                        }
                    </button>
                }
            }) }
        </div>
    }
}

// ============================================================================
// SCHEDULED DELIVERY PICKER
// ============================================================================
// ASAP vs programado, fecha dentro de la ventana de reserva y grilla de
// horarios. Emite la hora ISO-8601 elegida al checkout.
// ============================================================================

use chrono::{Datelike, NaiveDate, Weekday};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::slot_grid::SlotGrid;
use crate::hooks::use_scheduled_delivery;
use crate::models::{DeliveryMode, PickerPhase};

#[derive(Properties, PartialEq)]
pub struct ScheduledDeliveryPickerProps {
    pub item_id: String,
    #[prop_or(1)]
    pub quantity: u32,
    pub on_select: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(ScheduledDeliveryPicker)]
pub fn scheduled_delivery_picker(props: &ScheduledDeliveryPickerProps) -> Html {
    let handle = use_scheduled_delivery(
        props.item_id.clone(),
        props.quantity,
        props.on_select.clone(),
        props.on_clear.clone(),
    );
    let view = &handle.view;
    let phase = view.phase();

    let mode_button = |mode: DeliveryMode, label: &'static str| {
        let set_mode = handle.set_mode.clone();
        let active = view.mode() == mode;
        let onclick = Callback::from(move |_: MouseEvent| set_mode.emit(mode));
        html! {
            <button
                type="button"
                class={classes!("delivery-mode-btn", active.then_some("active"))}
                aria-pressed={active.to_string()}
                onclick={onclick}
            >
                {label}
            </button>
        }
    };

    let on_date_change = {
        let set_date = handle.set_date.clone();
        let clear = handle.clear.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if value.is_empty() {
                clear.emit(());
                return;
            }
            match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => set_date.emit(date),
                Err(e) => log::error!("❌ [SLOTS] Fecha inválida {}: {}", value, e),
            }
        })
    };

    let selected_date = view.selection().selected_date;
    let today = view.booking_window().first;

    html! {
        <div class="scheduled-delivery-picker">
            <div class="delivery-mode-toggle">
                { mode_button(DeliveryMode::Asap, "Lo antes posible") }
                { mode_button(DeliveryMode::Scheduled, "Programar") }
            </div>

            if phase != PickerPhase::Asap {
                <>
                <label class="delivery-date">
                    <span>{"Fecha de entrega"}</span>
                    <select onchange={on_date_change}>
                        <option value="" selected={selected_date.is_none()}>
                            {"Elige un día"}
                        </option>
                        { for view.available_dates().into_iter().map(|date| html! {
                            <option
                                value={date.format("%Y-%m-%d").to_string()}
                                selected={selected_date == Some(date)}
                            >
                                { date_label(date, today) }
                            </option>
                        }) }
                    </select>
                </label>

                if let Some(message) = handle.date_error.clone() {
                    <p class="delivery-date-error">{message}</p>
                }

                {
                    match slot_area(phase) {
                        SlotArea::Hidden => html! {},
                        SlotArea::Loading => html! {
                            <p class="slot-grid-loading">{"Cargando horarios..."}</p>
                        },
                        // Grilla vacía sin el texto de "sin horarios"
                        SlotArea::Error => html! {
                            <>
                                <p class="slot-grid-error">
                                    {view.error().unwrap_or_default().to_string()}
                                </p>
                                <div class="slot-grid" />
                            </>
                        },
                        SlotArea::Grid => html! {
                            <SlotGrid
                                slots={view.slots().to_vec()}
                                selected_time={view.selection().selected_time.clone()}
                                on_select={handle.select_slot.clone()}
                            />
                        },
                    }
                }
                </>
            }
        </div>
    }
}

/// Qué ocupa el área de horarios en cada fase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotArea {
    Hidden,
    Loading,
    Error,
    Grid,
}

fn slot_area(phase: PickerPhase) -> SlotArea {
    match phase {
        PickerPhase::Asap | PickerPhase::ScheduledNoDate => SlotArea::Hidden,
        PickerPhase::ScheduledLoading => SlotArea::Loading,
        PickerPhase::ScheduledError => SlotArea::Error,
        PickerPhase::ScheduledReady | PickerPhase::ScheduledSelected => SlotArea::Grid,
    }
}

fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lun",
        Weekday::Tue => "mar",
        Weekday::Wed => "mié",
        Weekday::Thu => "jue",
        Weekday::Fri => "vie",
        Weekday::Sat => "sáb",
        Weekday::Sun => "dom",
    }
}

fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    let day_month = date.format("%d/%m");
    match (date - today).num_days() {
        0 => format!("Hoy {}", day_month),
        1 => format!("Mañana {}", day_month),
        _ => format!("{} {}", weekday_short(date.weekday()), day_month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(date_label(today, today), "Hoy 19/10");
        assert_eq!(date_label(today.succ_opt().unwrap(), today), "Mañana 20/10");
        let friday = NaiveDate::from_ymd_opt(2026, 10, 23).unwrap();
        assert_eq!(date_label(friday, today), "vie 23/10");
    }

    #[test]
    fn test_date_label_weekdays_in_spanish() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let labels: Vec<String> = (2..=8)
            .filter_map(|n| today.checked_add_signed(chrono::Duration::days(n)))
            .map(|date| date_label(date, today))
            .collect();
        assert_eq!(
            labels,
            vec![
                "mié 21/10", "jue 22/10", "vie 23/10", "sáb 24/10", "dom 25/10", "lun 26/10",
                "mar 27/10",
            ]
        );
    }

    #[test]
    fn test_error_phase_shows_no_empty_state() {
        assert_eq!(slot_area(PickerPhase::ScheduledError), SlotArea::Error);
        assert_eq!(slot_area(PickerPhase::ScheduledReady), SlotArea::Grid);
        assert_eq!(slot_area(PickerPhase::ScheduledSelected), SlotArea::Grid);
        assert_eq!(slot_area(PickerPhase::ScheduledLoading), SlotArea::Loading);
        assert_eq!(slot_area(PickerPhase::ScheduledNoDate), SlotArea::Hidden);
    }
}

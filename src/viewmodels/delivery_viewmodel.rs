// ============================================================================
// DELIVERY VIEWMODEL - LÓGICA DE ENTREGA PROGRAMADA
// ============================================================================
// Máquina de estados ASAP / SCHEDULED sin DOM ni red.
// Devuelve Effects, el hook ejecuta el fetch y notifica al padre.
// ============================================================================

use chrono::NaiveDate;

use crate::errors::SlotError;
use crate::models::{
    BookingWindow, DeliveryMode, DeliverySelection, Effects, PickerPhase, SelectionEvent, SlotQuery,
    TimeSlot,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryViewModel {
    item_id: String,
    quantity: u32,
    window: BookingWindow,
    selection: DeliverySelection,
    slots: Vec<TimeSlot>,
    loading: bool,
    error: Option<String>,
    // Último request emitido; respuestas con otro id se descartan
    latest_request: u64,
}

impl DeliveryViewModel {
    pub fn new(item_id: impl Into<String>, quantity: u32, today: NaiveDate) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: quantity.max(1),
            window: BookingWindow::new(today),
            selection: DeliverySelection::default(),
            slots: Vec::new(),
            loading: false,
            error: None,
            latest_request: 0,
        }
    }

    pub fn selection(&self) -> &DeliverySelection {
        &self.selection
    }

    pub fn mode(&self) -> DeliveryMode {
        self.selection.mode
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn booking_window(&self) -> BookingWindow {
        self.window
    }

    /// Fechas seleccionables, hoy primero
    pub fn available_dates(&self) -> Vec<NaiveDate> {
        self.window.dates()
    }

    pub fn phase(&self) -> PickerPhase {
        match self.selection.mode {
            DeliveryMode::Asap => PickerPhase::Asap,
            DeliveryMode::Scheduled => {
                if self.selection.selected_date.is_none() {
                    PickerPhase::ScheduledNoDate
                } else if self.loading {
                    PickerPhase::ScheduledLoading
                } else if self.error.is_some() {
                    PickerPhase::ScheduledError
                } else if self.selection.selected_time.is_some() {
                    PickerPhase::ScheduledSelected
                } else {
                    PickerPhase::ScheduledReady
                }
            }
        }
    }

    pub fn set_mode(&mut self, mode: DeliveryMode) -> Effects {
        match mode {
            DeliveryMode::Asap => {
                log::info!("⚡ [SLOTS] Modo ASAP, limpiando selección");
                self.reset_schedule();
                self.selection.mode = DeliveryMode::Asap;
                Effects {
                    fetch: None,
                    notify: Some(SelectionEvent::Cleared),
                }
            }
            DeliveryMode::Scheduled => {
                if self.selection.mode == DeliveryMode::Scheduled {
                    return Effects::none();
                }
                log::info!("📅 [SLOTS] Modo programado");
                self.selection.mode = DeliveryMode::Scheduled;
                Effects::none()
            }
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) -> Result<Effects, SlotError> {
        if !self.window.contains(date) {
            return Err(SlotError::OutsideBookingWindow {
                date,
                first: self.window.first,
                last: self.window.last,
            });
        }
        if self.selection.mode == DeliveryMode::Asap {
            log::warn!("⚠️ [SLOTS] Fecha {} ignorada en modo ASAP", date);
            return Ok(Effects::none());
        }

        let notify = self.drop_selected_time();
        self.selection.selected_date = Some(date);
        Ok(Effects {
            fetch: Some(self.begin_fetch(date)),
            notify,
        })
    }

    /// La cantidad del carrito cambió: se vuelve a consultar la fecha actual
    pub fn set_quantity(&mut self, quantity: u32) -> Effects {
        let quantity = quantity.max(1);
        if quantity == self.quantity {
            return Effects::none();
        }
        self.quantity = quantity;

        match (self.selection.mode, self.selection.selected_date) {
            (DeliveryMode::Scheduled, Some(date)) => {
                let notify = self.drop_selected_time();
                Effects {
                    fetch: Some(self.begin_fetch(date)),
                    notify,
                }
            }
            _ => Effects::none(),
        }
    }

    /// Seleccionar un horario; no-op si no está disponible o no pertenece al fetch actual
    pub fn select_slot(&mut self, slot: &TimeSlot) -> Effects {
        if self.selection.mode != DeliveryMode::Scheduled || !slot.available {
            return Effects::none();
        }
        let known = self
            .slots
            .iter()
            .any(|s| s.available && s.time == slot.time);
        if !known {
            log::warn!("⚠️ [SLOTS] Horario {} no pertenece a la consulta actual", slot.time);
            return Effects::none();
        }
        if self.selection.selected_time.as_deref() == Some(slot.time.as_str()) {
            return Effects::none();
        }

        self.selection.selected_time = Some(slot.time.clone());
        Effects {
            fetch: None,
            notify: Some(SelectionEvent::Selected(slot.time.clone())),
        }
    }

    /// Limpia fecha y horario sin cambiar de modo
    pub fn clear(&mut self) -> Effects {
        self.reset_schedule();
        Effects {
            fetch: None,
            notify: Some(SelectionEvent::Cleared),
        }
    }

    /// Aplica el resultado de un fetch. Devuelve false si la respuesta quedó obsoleta.
    pub fn apply_slots(
        &mut self,
        request_id: u64,
        result: Result<Vec<TimeSlot>, SlotError>,
    ) -> bool {
        if request_id != self.latest_request || !self.loading {
            log::info!(
                "🗑️ [SLOTS] Respuesta #{} descartada (actual #{})",
                request_id, self.latest_request
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(slots) => {
                self.slots = slots;
                self.error = None;
            }
            Err(e) => {
                log::error!("❌ [SLOTS] Error cargando horarios: {}", e);
                self.slots.clear();
                self.error = Some(e.user_message());
            }
        }
        true
    }

    fn begin_fetch(&mut self, date: NaiveDate) -> SlotQuery {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        self.slots.clear();
        SlotQuery {
            request_id: self.latest_request,
            item_id: self.item_id.clone(),
            date,
            quantity: self.quantity,
        }
    }

    fn drop_selected_time(&mut self) -> Option<SelectionEvent> {
        self.selection
            .selected_time
            .take()
            .map(|_| SelectionEvent::Cleared)
    }

    fn reset_schedule(&mut self) {
        self.selection.selected_date = None;
        self.selection.selected_time = None;
        self.slots.clear();
        self.error = None;
        self.loading = false;
        // Invalida cualquier fetch en vuelo
        self.latest_request += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn slot(time: &str, available: bool) -> TimeSlot {
        TimeSlot {
            time: time.to_string(),
            display: String::new(),
            available,
            reason: None,
            remaining_capacity: None,
        }
    }

    fn scheduled() -> DeliveryViewModel {
        let mut vm = DeliveryViewModel::new("dish-7", 2, today());
        vm.set_mode(DeliveryMode::Scheduled);
        vm
    }

    fn loaded(slots: Vec<TimeSlot>) -> DeliveryViewModel {
        let mut vm = scheduled();
        let query = vm.set_date(today()).unwrap().fetch.unwrap();
        assert!(vm.apply_slots(query.request_id, Ok(slots)));
        vm
    }

    #[test]
    fn test_starts_in_asap() {
        let vm = DeliveryViewModel::new("dish-7", 1, today());
        assert_eq!(vm.phase(), PickerPhase::Asap);
        assert_eq!(vm.available_dates().len(), 8);
    }

    #[test]
    fn test_toggle_to_scheduled_has_no_date() {
        let vm = scheduled();
        assert_eq!(vm.phase(), PickerPhase::ScheduledNoDate);
        assert!(vm.slots().is_empty());
    }

    #[test]
    fn test_dates_outside_window_are_rejected() {
        let mut vm = scheduled();
        for offset in [-1, 8, 30] {
            let date = today() + Duration::days(offset);
            let err = vm.set_date(date).unwrap_err();
            assert!(matches!(err, SlotError::OutsideBookingWindow { .. }));
        }
        assert_eq!(vm.selection().selected_date, None);
        assert_eq!(vm.phase(), PickerPhase::ScheduledNoDate);

        assert!(vm.set_date(today() + Duration::days(7)).is_ok());
    }

    #[test]
    fn test_set_date_emits_query() {
        let mut vm = scheduled();
        let effects = vm.set_date(today()).unwrap();
        let query = effects.fetch.unwrap();
        assert_eq!(query.item_id, "dish-7");
        assert_eq!(query.date, today());
        assert_eq!(query.quantity, 2);
        assert_eq!(effects.notify, None);
        assert_eq!(vm.phase(), PickerPhase::ScheduledLoading);
    }

    #[test]
    fn test_new_date_clears_time_before_fetch_resolves() {
        let mut vm = loaded(vec![slot("2026-10-19T12:00:00Z", true)]);
        vm.select_slot(&slot("2026-10-19T12:00:00Z", true));
        assert_eq!(vm.phase(), PickerPhase::ScheduledSelected);

        let effects = vm.set_date(today() + Duration::days(1)).unwrap();
        assert_eq!(effects.notify, Some(SelectionEvent::Cleared));
        assert!(effects.fetch.is_some());
        assert_eq!(vm.selection().selected_time, None);
        assert_eq!(vm.phase(), PickerPhase::ScheduledLoading);
    }

    #[test]
    fn test_unavailable_slot_never_selected() {
        let closed = TimeSlot {
            reason: Some("closed".to_string()),
            ..slot("2026-10-19T12:30:00Z", false)
        };
        let mut vm = loaded(vec![slot("2026-10-19T12:00:00Z", true), closed.clone()]);

        assert!(vm.select_slot(&closed).is_empty());
        assert_eq!(vm.selection().selected_time, None);

        // Un slot marcado disponible por el llamador pero cerrado en el fetch tampoco
        let forged = TimeSlot { available: true, ..closed };
        assert!(vm.select_slot(&forged).is_empty());
        assert_eq!(vm.selection().selected_time, None);
    }

    #[test]
    fn test_select_slot_notifies_parent() {
        let mut vm = loaded(vec![slot("2026-10-19T12:00:00Z", true)]);
        let effects = vm.select_slot(&slot("2026-10-19T12:00:00Z", true));
        assert_eq!(
            effects.notify,
            Some(SelectionEvent::Selected("2026-10-19T12:00:00Z".to_string()))
        );
        assert_eq!(vm.selection().selected_time.as_deref(), Some("2026-10-19T12:00:00Z"));

        // Repetir el click no vuelve a notificar
        assert!(vm.select_slot(&slot("2026-10-19T12:00:00Z", true)).is_empty());
    }

    #[test]
    fn test_asap_clears_everything_and_notifies() {
        let mut vm = loaded(vec![slot("2026-10-19T12:00:00Z", true)]);
        vm.select_slot(&slot("2026-10-19T12:00:00Z", true));

        let effects = vm.set_mode(DeliveryMode::Asap);
        assert_eq!(effects.notify, Some(SelectionEvent::Cleared));
        assert_eq!(vm.selection().selected_date, None);
        assert_eq!(vm.selection().selected_time, None);
        assert!(vm.slots().is_empty());
        assert_eq!(vm.phase(), PickerPhase::Asap);

        // Incluso sin selección previa se notifica
        let mut fresh = DeliveryViewModel::new("dish-7", 1, today());
        assert_eq!(fresh.set_mode(DeliveryMode::Asap).notify, Some(SelectionEvent::Cleared));
    }

    #[test]
    fn test_fetch_failure_sets_error_and_empty_grid() {
        let mut vm = scheduled();
        let query = vm.set_date(today()).unwrap().fetch.unwrap();
        assert!(vm.apply_slots(query.request_id, Err(SlotError::Network("offline".to_string()))));

        assert_eq!(vm.phase(), PickerPhase::ScheduledError);
        assert!(!vm.is_loading());
        assert!(vm.slots().is_empty());
        assert!(vm.error().is_some());
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let vm = loaded(Vec::new());
        assert_eq!(vm.phase(), PickerPhase::ScheduledReady);
        assert_eq!(vm.error(), None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut vm = scheduled();
        let first = vm.set_date(today()).unwrap().fetch.unwrap();
        let second = vm.set_date(today() + Duration::days(1)).unwrap().fetch.unwrap();

        assert!(vm.apply_slots(second.request_id, Ok(vec![slot("2026-10-20T12:00:00Z", true)])));
        assert!(!vm.apply_slots(first.request_id, Ok(vec![slot("2026-10-19T09:00:00Z", true)])));

        assert_eq!(vm.slots().len(), 1);
        assert_eq!(vm.slots()[0].time, "2026-10-20T12:00:00Z");
    }

    #[test]
    fn test_response_after_asap_is_discarded() {
        let mut vm = scheduled();
        let query = vm.set_date(today()).unwrap().fetch.unwrap();
        vm.set_mode(DeliveryMode::Asap);
        assert!(!vm.apply_slots(query.request_id, Ok(vec![slot("2026-10-19T12:00:00Z", true)])));
        assert!(vm.slots().is_empty());
    }

    #[test]
    fn test_set_date_in_asap_is_ignored() {
        let mut vm = DeliveryViewModel::new("dish-7", 1, today());
        let effects = vm.set_date(today()).unwrap();
        assert!(effects.is_empty());
        assert_eq!(vm.selection().selected_date, None);
    }

    #[test]
    fn test_quantity_change_refetches() {
        let mut vm = loaded(vec![slot("2026-10-19T12:00:00Z", true)]);
        vm.select_slot(&slot("2026-10-19T12:00:00Z", true));

        let effects = vm.set_quantity(5);
        let query = effects.fetch.unwrap();
        assert_eq!(query.quantity, 5);
        assert_eq!(query.date, today());
        assert_eq!(effects.notify, Some(SelectionEvent::Cleared));

        assert!(vm.set_quantity(5).is_empty());
        assert_eq!(vm.set_quantity(0).fetch.unwrap().quantity, 1);
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut vm = loaded(vec![slot("2026-10-19T12:00:00Z", true)]);
        let effects = vm.clear();
        assert_eq!(effects.notify, Some(SelectionEvent::Cleared));
        assert_eq!(vm.mode(), DeliveryMode::Scheduled);
        assert_eq!(vm.phase(), PickerPhase::ScheduledNoDate);
    }
}

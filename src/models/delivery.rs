use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Días reservables después de hoy; la ventana es fija
pub const BOOKING_HORIZON_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMode {
    #[default]
    Asap,
    Scheduled,
}

/// Selección de entrega que se reporta al checkout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeliverySelection {
    pub mode: DeliveryMode,
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<String>,
}

/// Estado derivado del widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    Asap,
    ScheduledNoDate,
    ScheduledLoading,
    ScheduledReady,
    ScheduledSelected,
    ScheduledError,
}

/// Petición de horarios que el hook debe ejecutar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotQuery {
    pub request_id: u64,
    pub item_id: String,
    pub date: NaiveDate,
    pub quantity: u32,
}

/// Notificación hacia el componente padre (onSelect / onClear)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(String),
    Cleared,
}

/// Efectos de una transición: lo que el hook tiene que hacer después
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Effects {
    pub fetch: Option<SlotQuery>,
    pub notify: Option<SelectionEvent>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fetch.is_none() && self.notify.is_none()
    }
}

/// Ventana de reserva `[today, today + BOOKING_HORIZON_DAYS]` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl BookingWindow {
    pub fn new(today: NaiveDate) -> Self {
        // Cerca de NaiveDate::MAX la ventana se recorta en vez de desbordar
        let last = today
            .checked_add_signed(Duration::days(i64::from(BOOKING_HORIZON_DAYS)))
            .unwrap_or(NaiveDate::MAX);
        Self { first: today, last }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut next = Some(self.first);
        while let Some(date) = next.filter(|d| *d <= self.last) {
            dates.push(date);
            next = date.succ_opt();
        }
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_is_inclusive() {
        let window = BookingWindow::new(day(2026, 10, 19));
        assert!(window.contains(day(2026, 10, 19)));
        assert!(window.contains(day(2026, 10, 26)));
        assert!(!window.contains(day(2026, 10, 18)));
        assert!(!window.contains(day(2026, 10, 27)));
    }

    #[test]
    fn test_window_dates_cross_month() {
        let window = BookingWindow::new(day(2026, 10, 28));
        let dates = window.dates();
        assert_eq!(dates.len(), 8);
        assert_eq!(dates[0], day(2026, 10, 28));
        assert_eq!(dates[7], day(2026, 11, 4));
    }

    #[test]
    fn test_window_is_always_one_week() {
        let today = day(2026, 10, 19);
        let window = BookingWindow::new(today);
        assert_eq!(window.last, today + Duration::days(7));
        assert!(!window.contains(today + Duration::days(14)));
        assert_eq!(window.dates().len(), 8);
    }

    #[test]
    fn test_window_near_max_date_does_not_overflow() {
        let window = BookingWindow::new(NaiveDate::MAX);
        assert_eq!(window.first, NaiveDate::MAX);
        assert_eq!(window.last, NaiveDate::MAX);
        assert_eq!(window.dates(), vec![NaiveDate::MAX]);
    }

    #[test]
    fn test_mode_wire_format() {
        assert_eq!(serde_json::to_string(&DeliveryMode::Scheduled).unwrap(), "\"SCHEDULED\"");
        assert_eq!(DeliveryMode::default(), DeliveryMode::Asap);
    }
}

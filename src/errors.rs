// ============================================================================
// ERRORES - Taxonomía de errores del flujo de entrega programada
// ============================================================================

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{date} está fuera de la ventana de reserva ({first} - {last})")]
    OutsideBookingWindow {
        date: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl SlotError {
    /// Texto que se muestra dentro del widget (nunca el detalle técnico)
    pub fn user_message(&self) -> String {
        match self {
            SlotError::Network(_) => {
                "No se pudieron cargar los horarios. Revisa tu conexión.".to_string()
            }
            SlotError::Http { status, .. } if *status == 401 || *status == 403 => {
                "Inicia sesión para ver los horarios disponibles.".to_string()
            }
            SlotError::Http { .. } | SlotError::Parse(_) => {
                "No se pudieron cargar los horarios. Inténtalo de nuevo.".to_string()
            }
            SlotError::OutsideBookingWindow { first, last, .. } => {
                format!(
                    "Elige una fecha entre el {} y el {}.",
                    first.format("%d/%m"),
                    last.format("%d/%m")
                )
            }
            SlotError::Storage(_) => "No se pudo guardar la dirección.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_details() {
        let err = SlotError::Network("TypeError: Failed to fetch".to_string());
        assert!(!err.user_message().contains("TypeError"));
        assert!(err.to_string().contains("TypeError"));
    }

    #[test]
    fn test_unauthorized_message() {
        let err = SlotError::Http { status: 401, message: "Unauthorized".to_string() };
        assert!(err.user_message().contains("Inicia sesión"));
    }
}

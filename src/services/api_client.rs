// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Consulta de horarios disponibles. Sin reintentos: un nuevo intento solo
// ocurre cuando cambian la fecha o la cantidad.
// ============================================================================

use gloo_net::http::Request;
use serde::Deserialize;

use crate::config::StorefrontConfig;
use crate::errors::SlotError;
use crate::models::{SlotQuery, TimeSlot};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    time_slots_path: String,
}

/// El backend devuelve un array; algunas versiones lo envuelven en `{ "slots": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum TimeSlotsBody {
    List(Vec<TimeSlot>),
    Wrapped { slots: Vec<TimeSlot> },
}

impl ApiClient {
    pub fn new(base_url: &str, time_slots_path: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            time_slots_path: time_slots_path.trim_start_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.backend_url(), &config.slots.time_slots_path)
    }

    pub fn time_slots_endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.time_slots_path)
    }

    pub fn time_slots_params(query: &SlotQuery) -> [(&'static str, String); 3] {
        [
            ("item", query.item_id.clone()),
            ("date", query.date.format("%Y-%m-%d").to_string()),
            ("quantity", query.quantity.to_string()),
        ]
    }

    /// Obtener horarios para un plato, fecha y cantidad
    pub async fn fetch_time_slots(
        &self,
        query: &SlotQuery,
        auth_token: Option<&str>,
    ) -> Result<Vec<TimeSlot>, SlotError> {
        let url = self.time_slots_endpoint();

        log::info!(
            "🕒 [SLOTS] #{} item={} date={} quantity={}",
            query.request_id, query.item_id, query.date, query.quantity
        );

        let mut request = Request::get(&url).query(Self::time_slots_params(query));
        if let Some(token) = auth_token.filter(|t| !t.is_empty()) {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| SlotError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(SlotError::Http { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SlotError::Network(e.to_string()))?;
        let slots = parse_time_slots(&body)?;

        log::info!("✅ [SLOTS] #{} {} horarios recibidos", query.request_id, slots.len());
        Ok(slots)
    }
}

pub fn parse_time_slots(body: &str) -> Result<Vec<TimeSlot>, SlotError> {
    let parsed: TimeSlotsBody =
        serde_json::from_str(body).map_err(|e| SlotError::Parse(e.to_string()))?;
    Ok(match parsed {
        TimeSlotsBody::List(slots) => slots,
        TimeSlotsBody::Wrapped { slots } => slots,
    })
}

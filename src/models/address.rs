use serde::{Deserialize, Serialize};

/// Dirección de entrega elegida por el cliente (persistida en localStorage)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DeliveryAddress {
    #[serde(default)]
    pub label: String,
    pub street: String,
    pub city: String,
    #[serde(default, alias = "zip_code")]
    pub postal_code: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl DeliveryAddress {
    /// Línea corta para la cápsula de dirección
    pub fn short_line(&self) -> String {
        if !self.label.trim().is_empty() {
            return self.label.clone();
        }
        if self.city.is_empty() {
            self.street.clone()
        } else {
            format!("{}, {}", self.street, self.city)
        }
    }
}

// ============================================================================
// DELIVERY CONTEXT - Configuración inyectada para el flujo de entrega
// ============================================================================
// Token, API y dirección se leen una sola vez aquí y se pasan por Context;
// los componentes no tocan cookies ni localStorage directamente. "Hoy" se
// evalúa cuando se monta cada picker, no cuando se monta el provider.
// ============================================================================

use std::rc::Rc;

use chrono::NaiveDate;
use yew::prelude::*;

use crate::config::{StorefrontConfig, CONFIG};
use crate::services::ApiClient;
use crate::state::AddressStore;
use crate::utils::{read_cookie, BrowserStorage, KeyValueStore};

#[derive(Clone, PartialEq)]
pub struct DeliveryContext {
    pub api: ApiClient,
    pub auth_token: Option<String>,
    /// Fecha fija (tests, previews); None = fecha local del navegador
    pub fixed_today: Option<NaiveDate>,
    pub addresses: AddressStore,
}

impl DeliveryContext {
    /// Contexto real del navegador
    pub fn from_browser(config: &StorefrontConfig) -> Self {
        let storage: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
        let auth_token = read_cookie(&config.auth_cookie_name);
        log::info!(
            "🔧 [CONTEXT] backend={} token={}",
            config.backend_url(),
            if auth_token.is_some() { "sí" } else { "no" }
        );
        Self {
            api: ApiClient::from_config(config),
            auth_token,
            fixed_today: None,
            addresses: AddressStore::load(storage),
        }
    }

    /// "Hoy" en el momento de la llamada
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[derive(Properties, PartialEq)]
pub struct DeliveryContextProviderProps {
    /// Contexto explícito (tests, previews); si falta se construye desde el navegador
    #[prop_or_default]
    pub context: Option<DeliveryContext>,
    pub children: Children,
}

#[function_component(DeliveryContextProvider)]
pub fn delivery_context_provider(props: &DeliveryContextProviderProps) -> Html {
    let initial = props.context.clone();
    let context =
        use_state(move || initial.unwrap_or_else(|| DeliveryContext::from_browser(&CONFIG)));

    html! {
        <ContextProvider<DeliveryContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<DeliveryContext>>
    }
}

/// Context del provider; fuera de él se construye uno desde el navegador
#[hook]
pub fn use_delivery_context() -> DeliveryContext {
    let provided = use_context::<DeliveryContext>();
    let fallback = use_mut_ref(|| None::<DeliveryContext>);
    provided.unwrap_or_else(|| {
        fallback
            .borrow_mut()
            .get_or_insert_with(|| {
                log::warn!(
                    "⚠️ [CONTEXT] Sin DeliveryContextProvider, usando configuración global"
                );
                DeliveryContext::from_browser(&CONFIG)
            })
            .clone()
    })
}

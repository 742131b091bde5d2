// ============================================================================
// ADDRESS CAPSULE - Dirección de entrega activa
// ============================================================================
// Se suscribe al AddressStore del contexto; cualquier otra vista que cambie
// la dirección se refleja aquí sin eventos globales.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_delivery_context;
use crate::models::DeliveryAddress;

#[derive(Debug, Clone, PartialEq, Default)]
struct AddressForm {
    street: String,
    city: String,
    postal_code: String,
}

impl AddressForm {
    fn from_address(address: Option<&DeliveryAddress>) -> Self {
        address
            .map(|a| Self {
                street: a.street.clone(),
                city: a.city.clone(),
                postal_code: a.postal_code.clone(),
            })
            .unwrap_or_default()
    }

    fn is_complete(&self) -> bool {
        !self.street.trim().is_empty() && !self.city.trim().is_empty()
    }
}

#[function_component(AddressCapsule)]
pub fn address_capsule() -> Html {
    let context = use_delivery_context();
    let store = context.addresses.clone();
    let address = use_state(|| store.current());
    let editing = use_state(|| false);
    let form = use_state(AddressForm::default);
    let save_error = use_state(|| None::<String>);

    {
        let store = store.clone();
        let address = address.clone();
        use_effect_with(store, move |store| {
            let id = store.subscribe(move |current| address.set(current.clone()));
            let store = store.clone();
            move || store.unsubscribe(id)
        });
    }

    let start_edit = {
        let editing = editing.clone();
        let form = form.clone();
        let address = address.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(AddressForm::from_address((*address).as_ref()));
            editing.set(true);
        })
    };

    let field = |update: fn(&mut AddressForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };

    let on_save = {
        let store = store.clone();
        let form = form.clone();
        let editing = editing.clone();
        let save_error = save_error.clone();
        let previous = (*address).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                save_error.set(Some("Calle y ciudad son obligatorias".to_string()));
                return;
            }
            let mut updated = previous.clone().unwrap_or_default();
            updated.street = form.street.trim().to_string();
            updated.city = form.city.trim().to_string();
            updated.postal_code = form.postal_code.trim().to_string();
            // Coordenadas viejas ya no corresponden a la nueva calle
            if previous.as_ref().map(|p| p.street != updated.street).unwrap_or(true) {
                updated.latitude = None;
                updated.longitude = None;
            }
            match store.set_address(updated) {
                Ok(()) => {
                    save_error.set(None);
                    editing.set(false);
                }
                Err(err) => {
                    log::error!("❌ [ADDRESS] {}", err);
                    save_error.set(Some(err.user_message()));
                }
            }
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        let save_error = save_error.clone();
        Callback::from(move |_: MouseEvent| {
            save_error.set(None);
            editing.set(false);
        })
    };

    if *editing {
        return html! {
            <form class="address-capsule editing" onsubmit={on_save}>
                <input placeholder="Calle y número" value={form.street.clone()}
                    oninput={field(|f, v| f.street = v)} />
                <input placeholder="Ciudad" value={form.city.clone()}
                    oninput={field(|f, v| f.city = v)} />
                <input placeholder="Código postal" value={form.postal_code.clone()}
                    oninput={field(|f, v| f.postal_code = v)} />
                if let Some(message) = (*save_error).clone() {
                    <p class="address-error">{message}</p>
                }
                <button type="submit">{"Guardar"}</button>
                <button type="button" onclick={on_cancel}>{"Cancelar"}</button>
            </form>
        };
    }

    html! {
        <div class="address-capsule">
            <span class="address-icon">{"📍"}</span>
            {
                match (*address).as_ref() {
                    Some(a) => html! { <span class="address-line">{a.short_line()}</span> },
                    None => html! {
                        <span class="address-line empty">{"Añade una dirección de entrega"}</span>
                    },
                }
            }
            <button type="button" class="address-change" onclick={start_edit}>{"Cambiar"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_requires_street_and_city() {
        let mut form = AddressForm::default();
        assert!(!form.is_complete());
        form.street = "Calle Mayor 3".to_string();
        form.city = "  ".to_string();
        assert!(!form.is_complete());
        form.city = "Madrid".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn test_form_prefill() {
        let address = DeliveryAddress {
            street: "Calle Mayor 3".to_string(),
            city: "Madrid".to_string(),
            postal_code: "28013".to_string(),
            ..Default::default()
        };
        let form = AddressForm::from_address(Some(&address));
        assert_eq!(form.postal_code, "28013");
        assert_eq!(AddressForm::from_address(None), AddressForm::default());
    }
}

// ============================================================================
// APP - Checkout mínimo que monta el selector de entrega
// ============================================================================

use yew::prelude::*;

use crate::components::{AddressCapsule, ScheduledDeliveryPicker};
use crate::hooks::DeliveryContextProvider;

const DEMO_ITEM_ID: &str = "1";

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <DeliveryContextProvider>
            <CheckoutPage item_id={DEMO_ITEM_ID.to_string()} />
        </DeliveryContextProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckoutPageProps {
    pub item_id: String,
}

#[function_component(CheckoutPage)]
pub fn checkout_page(props: &CheckoutPageProps) -> Html {
    let quantity = use_state(|| 1u32);
    let scheduled_for = use_state(|| None::<String>);

    let on_select = {
        let scheduled_for = scheduled_for.clone();
        Callback::from(move |time: String| {
            log::info!("✅ [CHECKOUT] Entrega programada para {}", time);
            scheduled_for.set(Some(time));
        })
    };

    let on_clear = {
        let scheduled_for = scheduled_for.clone();
        Callback::from(move |_: ()| {
            log::info!("🧹 [CHECKOUT] Horario de entrega limpiado");
            scheduled_for.set(None);
        })
    };

    let change_quantity = |delta: i32| {
        let quantity = quantity.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*quantity as i32 + delta).max(1) as u32;
            quantity.set(next);
        })
    };

    html! {
        <main class="checkout">
            <AddressCapsule />
            <div class="checkout-quantity">
                <button type="button" onclick={change_quantity(-1)}>{"−"}</button>
                <span>{*quantity}</span>
                <button type="button" onclick={change_quantity(1)}>{"+"}</button>
            </div>
            <ScheduledDeliveryPicker
                key={props.item_id.clone()}
                item_id={props.item_id.clone()}
                quantity={*quantity}
                on_select={on_select}
                on_clear={on_clear}
            />
            <p class="checkout-summary">
                {
                    match (*scheduled_for).as_ref() {
                        Some(time) => format!("Entrega programada: {}", time),
                        None => "Entrega: lo antes posible".to_string(),
                    }
                }
            </p>
        </main>
    }
}

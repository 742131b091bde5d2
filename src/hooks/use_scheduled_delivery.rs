// ============================================================================
// USE SCHEDULED DELIVERY HOOK
// ============================================================================
// Ejecuta DeliveryViewModel dentro de Yew: el viewmodel decide, el hook
// lanza el fetch con spawn_local y reenvía onSelect / onClear al padre.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use yew::prelude::*;

use crate::hooks::delivery_context::use_delivery_context;
use crate::models::{DeliveryMode, Effects, SelectionEvent, TimeSlot};
use crate::services::ApiClient;
use crate::viewmodels::DeliveryViewModel;

#[derive(Clone)]
pub struct UseScheduledDeliveryHandle {
    /// Copia del viewmodel para este render
    pub view: DeliveryViewModel,
    pub date_error: Option<String>,
    pub set_mode: Callback<DeliveryMode>,
    pub set_date: Callback<NaiveDate>,
    pub select_slot: Callback<TimeSlot>,
    pub clear: Callback<()>,
}

#[derive(Clone)]
struct EffectRunner {
    vm: Rc<RefCell<DeliveryViewModel>>,
    api: ApiClient,
    auth_token: Option<String>,
    on_select: Callback<String>,
    on_clear: Callback<()>,
    update: UseForceUpdateHandle,
}

impl EffectRunner {
    fn run(&self, effects: Effects) {
        match effects.notify {
            Some(SelectionEvent::Selected(time)) => self.on_select.emit(time),
            Some(SelectionEvent::Cleared) => self.on_clear.emit(()),
            None => {}
        }

        if let Some(query) = effects.fetch {
            let vm = self.vm.clone();
            let api = self.api.clone();
            let auth_token = self.auth_token.clone();
            let update = self.update.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.fetch_time_slots(&query, auth_token.as_deref()).await;
                let applied = vm.borrow_mut().apply_slots(query.request_id, result);
                if applied {
                    update.force_update();
                }
            });
        }

        self.update.force_update();
    }
}

#[hook]
pub fn use_scheduled_delivery(
    item_id: String,
    quantity: u32,
    on_select: Callback<String>,
    on_clear: Callback<()>,
) -> UseScheduledDeliveryHandle {
    let context = use_delivery_context();
    // "Hoy" se calcula al montar el picker, no al montar el provider
    let vm = {
        let context = context.clone();
        use_mut_ref(move || DeliveryViewModel::new(item_id, quantity, context.today()))
    };
    let date_error = use_state(|| None::<String>);
    let update = use_force_update();

    let runner = EffectRunner {
        vm: vm.clone(),
        api: context.api.clone(),
        auth_token: context.auth_token.clone(),
        on_select,
        on_clear,
        update,
    };

    // Cambio de cantidad en el carrito
    {
        let runner = runner.clone();
        use_effect_with(quantity, move |quantity| {
            let effects = runner.vm.borrow_mut().set_quantity(*quantity);
            if !effects.is_empty() {
                runner.run(effects);
            }
            || ()
        });
    }

    let set_mode = {
        let runner = runner.clone();
        let date_error = date_error.clone();
        Callback::from(move |mode: DeliveryMode| {
            date_error.set(None);
            let effects = runner.vm.borrow_mut().set_mode(mode);
            runner.run(effects);
        })
    };

    let set_date = {
        let runner = runner.clone();
        let date_error = date_error.clone();
        Callback::from(move |date: NaiveDate| {
            let result = runner.vm.borrow_mut().set_date(date);
            match result {
                Ok(effects) => {
                    date_error.set(None);
                    runner.run(effects);
                }
                Err(e) => {
                    log::warn!("⚠️ [SLOTS] {}", e);
                    date_error.set(Some(e.user_message()));
                }
            }
        })
    };

    let select_slot = {
        let runner = runner.clone();
        Callback::from(move |slot: TimeSlot| {
            let effects = runner.vm.borrow_mut().select_slot(&slot);
            if !effects.is_empty() {
                runner.run(effects);
            }
        })
    };

    let clear = {
        let runner = runner.clone();
        let date_error = date_error.clone();
        Callback::from(move |_: ()| {
            date_error.set(None);
            let effects = runner.vm.borrow_mut().clear();
            runner.run(effects);
        })
    };

    let view = vm.borrow().clone();

    UseScheduledDeliveryHandle {
        view,
        date_error: (*date_error).clone(),
        set_mode,
        set_date,
        select_slot,
        clear,
    }
}

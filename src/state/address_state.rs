// ============================================================================
// ADDRESS STATE - Dirección de entrega compartida entre componentes
// ============================================================================

use std::rc::Rc;

use crate::errors::SlotError;
use crate::models::DeliveryAddress;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::utils::storage::{load_json, save_json, KeyValueStore};

pub const ADDRESS_STORAGE_KEY: &str = "storefront_delivery_address";

#[derive(Clone)]
pub struct AddressStore {
    address: ReactiveState<Option<DeliveryAddress>>,
    storage: Rc<dyn KeyValueStore>,
}

impl PartialEq for AddressStore {
    fn eq(&self, other: &Self) -> bool {
        self.address.ptr_eq(&other.address)
    }
}

impl AddressStore {
    /// Crea el store cargando la dirección persistida, si existe
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let persisted: Option<DeliveryAddress> =
            load_json(storage.as_ref(), ADDRESS_STORAGE_KEY);
        if let Some(ref address) = persisted {
            log::info!("📍 [ADDRESS] Dirección restaurada: {}", address.short_line());
        }
        Self {
            address: ReactiveState::new(persisted),
            storage,
        }
    }

    pub fn current(&self) -> Option<DeliveryAddress> {
        self.address.get()
    }

    /// Persiste primero; si falla el guardado no se notifica
    pub fn set_address(&self, address: DeliveryAddress) -> Result<(), SlotError> {
        save_json(self.storage.as_ref(), ADDRESS_STORAGE_KEY, &address)?;
        log::info!("📍 [ADDRESS] Nueva dirección: {}", address.short_line());
        self.address.set(Some(address));
        Ok(())
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Option<DeliveryAddress>) + 'static,
    {
        self.address.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.address.unsubscribe(id);
    }
}

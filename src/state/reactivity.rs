// ============================================================================
// REACTIVITY - Estado compartido con subscribers
// ============================================================================
// Reemplaza los CustomEvent globales: quien necesita el valor se suscribe.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Estado reactivo; los clones comparten valor y subscribers
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Callback<T>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Quitar subscriber (cleanup de use_effect)
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }

    fn notify(&self) {
        // Snapshot: un callback puede suscribirse o desuscribirse mientras notificamos
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        let value = self.get();
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

use contracts::domain::a002_customer::{Customer, CustomerDto};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use super::model;

/// ViewModel for the customer details form
#[derive(Clone)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
}

impl CustomerDetailsViewModel {
    pub fn new(existing: Option<Customer>) -> Self {
        let form = match existing {
            Some(c) => CustomerDto {
                id: Some(c.id),
                name: c.name,
                phone_number: c.phone_number,
                notes: c.notes,
            },
            None => CustomerDto::default(),
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(Customer)>) {
        let current = self.form.get();

        // Same checks the backend applies, surfaced before the request
        if let Err(e) = Customer::from_dto(&current).validate() {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        spawn_local(async move {
            match model::save(&current).await {
                Ok(saved) => (on_saved)(saved),
                Err(e) => error.set(Some(format!("Ошибка сохранения: {}", e))),
            }
        });
    }
}

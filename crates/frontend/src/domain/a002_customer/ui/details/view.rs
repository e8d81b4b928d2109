use contracts::domain::a002_customer::Customer;
use leptos::prelude::*;
use std::rc::Rc;

use super::view_model::CustomerDetailsViewModel;

#[component]
pub fn CustomerDetails(
    existing: Option<Customer>,
    on_saved: Rc<dyn Fn(Customer)>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new(existing);
    let vm_clone = vm.clone();
    let edit_mode = vm.is_edit_mode();

    view! {
        <div class="details-container customer-details">
            <div class="details-header">
                <h3>
                    {if edit_mode { "Редактирование клиента" } else { "Новый клиент" }}
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Имя"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Введите имя клиента"
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{"Телефон"}</label>
                    <input
                        type="tel"
                        id="phone"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().phone_number
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.phone_number = event_target_value(&ev));
                            }
                        }
                        placeholder="+7 (999) 123-45-67"
                    />
                </div>

                <div class="form-group">
                    <label for="notes">{"Заметки"}</label>
                    <textarea
                        id="notes"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().notes.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.notes = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="Любимый напиток, предпочтения (необязательно)"
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                >
                    "Сохранить"
                </button>
                <button
                    class="btn"
                    on:click={
                        let on_cancel = on_cancel.clone();
                        move |_| (on_cancel)(())
                    }
                >
                    "Отмена"
                </button>
            </div>
        </div>
    }
}

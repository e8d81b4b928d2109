use contracts::domain::a002_customer::Customer;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::domain::a002_customer::ui::details::CustomerDetails;

/// Dialog state: closed, creating, or editing one record
type EditorState = Option<Option<Customer>>;

#[component]
pub fn CustomerListPage() -> impl IntoView {
    let customers = RwSignal::new(Vec::<Customer>::new());
    let search = RwSignal::new(String::new());
    let editor: RwSignal<EditorState> = RwSignal::new(None);
    let error = RwSignal::new(Option::<String>::None);

    let reload = move || {
        spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => customers.set(list),
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    };
    reload();

    let filtered = move || {
        let q = search.get().trim().to_lowercase();
        let all = customers.get();
        if q.is_empty() {
            all
        } else {
            all.into_iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(&q) || c.phone_number.contains(&q)
                })
                .collect()
        }
    };

    let delete_customer = move |id: String, name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Удалить клиента {}?", name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match model::delete(&id).await {
                Ok(()) => reload(),
                Err(e) => error.set(Some(format!("Ошибка удаления: {}", e))),
            }
        });
    };

    view! {
        <div class="customers-page">
            <div class="customers-page__toolbar">
                <h2>"Клиенты"</h2>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Поиск по имени или телефону"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=move |_| editor.set(Some(None))>
                    "Новый клиент"
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <table class="customers-table">
                <thead>
                    <tr>
                        <th>"Имя"</th>
                        <th>"Телефон"</th>
                        <th>"Заметки"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|c| {
                                let edit_target = c.clone();
                                let delete_id = c.id.clone();
                                let delete_name = c.name.clone();
                                view! {
                                    <tr>
                                        <td>{c.name.clone()}</td>
                                        <td>{c.phone_number.clone()}</td>
                                        <td>{c.notes.clone().unwrap_or_default()}</td>
                                        <td class="customers-table__actions">
                                            <button
                                                class="btn-link"
                                                on:click=move |_| editor.set(Some(Some(edit_target.clone())))
                                            >
                                                "Изменить"
                                            </button>
                                            <button
                                                class="btn-link btn-link--danger"
                                                on:click=move |_| delete_customer(delete_id.clone(), delete_name.clone())
                                            >
                                                "Удалить"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <Show when=move || editor.get().is_some()>
                <div class="dialog-overlay">
                    <div class="dialog">
                        {move || {
                            editor.get().map(|existing| {
                                let on_saved: Rc<dyn Fn(Customer)> = Rc::new(move |_| {
                                    editor.set(None);
                                    reload();
                                });
                                let on_cancel: Rc<dyn Fn(())> =
                                    Rc::new(move |_| editor.set(None));
                                view! {
                                    <CustomerDetails
                                        existing=existing
                                        on_saved=on_saved
                                        on_cancel=on_cancel
                                    />
                                }
                            })
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}

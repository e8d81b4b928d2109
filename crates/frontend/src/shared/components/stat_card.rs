use leptos::prelude::*;

/// One indicator tile of the dashboard header row
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Pre-formatted value; None = loading
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{formatted}</div>
        </div>
    }
}

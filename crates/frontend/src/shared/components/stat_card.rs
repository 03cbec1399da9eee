use leptos::prelude::*;

/// Summary card with a header label and one preformatted value.
///
/// The backend owns all value formatting; the card renders the display
/// string verbatim and falls back to an em dash while nothing is loaded.
#[component]
pub fn StatCard(
    /// Label displayed in the card header
    #[prop(into)]
    label: String,
    /// Preformatted value (None = loading / no data yet)
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "\u{2014}".to_string());

    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{formatted}</div>
        </div>
    }
}

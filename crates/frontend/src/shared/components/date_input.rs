use leptos::prelude::*;

/// DateInput component with native date picker, bounded to the dataset span.
/// Browser automatically displays dates in locale format.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Earliest selectable date (yyyy-mm-dd)
    #[prop(into)]
    min: Signal<String>,
    /// Latest selectable date (yyyy-mm-dd)
    #[prop(into)]
    max: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            type="date"
            prop:value=value
            min=move || min.get()
            max=move || max.get()
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
            style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 150px;"
        />
    }
}

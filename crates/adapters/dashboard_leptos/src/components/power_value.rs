//! Power card for displaying a labelled wattage.

use leptos::prelude::*;

/// A card displaying a label and a power value in watts.
///
/// The value element carries `id` so the page stylesheet can address it.
#[component]
pub fn PowerValue(
    /// Element id of the value, e.g. `gridPower`.
    #[prop(into)]
    id: String,
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// Whole watts without the unit, `None` before the first snapshot.
    #[prop(into)]
    watts: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="power-card">
            <span class="power-label">{label}</span>
            <div id=id class="power-value">
                {move || watts.get().unwrap_or_else(|| "--".to_string())}
                <span class="unit">"W"</span>
            </div>
        </div>
    }
}

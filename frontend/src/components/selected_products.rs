use leptos::prelude::*;

use skincare_advisor::view::NO_SELECTION;

use crate::services::picker_service::use_picker_state;

/// Removable list plus compact image grid of the current selection.
#[component]
pub fn SelectedProducts() -> impl IntoView {
    let state = use_picker_state();
    let summary = Memo::new(move |_| state.picker.with(|p| p.selected_summary()));

    let list = move || {
        let summary = summary.get();
        if summary.is_empty() {
            return view! { <p class="placeholder-message">{NO_SELECTION}</p> }.into_any();
        }
        summary
            .list
            .into_iter()
            .map(|item| {
                let key = item.key.clone();
                view! {
                    <div class="selected-item">
                        <span>{item.label}</span>
                        <button
                            type="button"
                            class="remove-selected"
                            on:click=move |_| state.remove(&key)
                        >
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let grid = move || {
        let summary = summary.get();
        if summary.is_empty() {
            return view! { <p class="placeholder-message">{NO_SELECTION}</p> }.into_any();
        }
        summary
            .grid
            .into_iter()
            .map(|thumb| {
                let title = thumb.alt.clone();
                view! {
                    <div class="selected-thumb" title=title>
                        <img src=thumb.image alt=thumb.alt />
                        <span>{thumb.name}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <h2>"Selected Products"</h2>
        <div id="selectedProductsList">{list}</div>
        <div id="selected-products" class="selected-grid">{grid}</div>
    }
}

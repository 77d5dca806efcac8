use leptos::prelude::*;

use crate::services::picker_service::use_picker_state;

pub const CATEGORY_PROMPT: &str = "Choose a Category";

/// Category selector and search box.
#[component]
pub fn Filters() -> impl IntoView {
    let state = use_picker_state();
    let picker = state.picker;

    let categories = Memo::new(move |_| picker.with(|p| p.catalog().categories()));
    let selected_category = move || picker.with(|p| p.category().to_string());

    view! {
        <div class="search-bar">
            <select
                id="categoryFilter"
                prop:value=selected_category
                on:change=move |ev| state.set_category(event_target_value(&ev))
            >
                <option value="">{CATEGORY_PROMPT}</option>
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let label = category.clone();
                        view! { <option value=category>{label}</option> }
                    }
                />
            </select>
            <input
                type="search"
                id="productSearch"
                placeholder="Search products by name or keyword..."
                prop:value=move || picker.with(|p| p.query().to_string())
                on:input=move |ev| state.set_query(event_target_value(&ev))
            />
        </div>
    }
}

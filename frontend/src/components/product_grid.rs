use leptos::prelude::*;
use web_sys::KeyboardEvent;

use skincare_advisor::view::{ProductCard, ProductsView};

use crate::services::picker_service::use_picker_state;

/// Products for the active category and search.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let state = use_picker_state();
    let products_view = Memo::new(move |_| state.picker.with(|p| p.products_view()));

    view! {
        <div id="productsContainer" class="products-grid">
            {move || match products_view.get() {
                ProductsView::Placeholder(text) => {
                    view! { <div class="placeholder-message">{text}</div> }.into_any()
                }
                ProductsView::Cards(cards) => {
                    cards
                        .into_iter()
                        .map(|card| view! { <ProductCardView card=card /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProductCardView(card: ProductCard) -> impl IntoView {
    let state = use_picker_state();
    let ProductCard {
        key,
        name,
        brand,
        image,
        description,
        selected,
    } = card;

    let click_key = key.clone();
    let on_keydown = move |ev: KeyboardEvent| {
        let k = ev.key();
        if k == "Enter" || k == " " {
            ev.prevent_default();
            state.toggle(&key);
        }
    };
    let alt = name.clone();

    view! {
        <div
            class="product-card"
            class:selected=selected
            role="button"
            tabindex="0"
            aria-pressed=selected.to_string()
            on:click=move |_| state.toggle(&click_key)
            on:keydown=on_keydown
        >
            <img src=image alt=alt />
            <div class="product-info">
                <h3>{name}</h3>
                <p>{brand}</p>
            </div>
            <div class="product-desc-overlay">
                <p>{description}</p>
            </div>
        </div>
    }
}

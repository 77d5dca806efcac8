use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use skincare_advisor::AppConfig;

use crate::bindings::{ensure_style, global_api_key, page_href, set_body_dir, LocalStorageSlot};
use crate::components::chat::Chat;
use crate::components::controls::Controls;
use crate::components::filters::Filters;
use crate::components::product_grid::ProductGrid;
use crate::components::selected_products::SelectedProducts;
use crate::services::chat_service::provide_chat_state;
use crate::services::layout_service::{provide_layout_state, use_layout_state, Direction};
use crate::services::picker_service::{provide_picker_state, CatalogSource};

const OVERLAY_STYLE_ID: &str = "product-overlay-styles";

const OVERLAY_CSS: &str = r#"
.product-card { position: relative; overflow: visible; }
.product-card img { display: block; max-width: 100%; height: auto; }
.product-card.selected { border: 2px solid #007bff; }
.product-desc-overlay {
  display: none;
  position: absolute;
  left: 8px;
  right: 8px;
  bottom: 8px;
  background: rgba(0,0,0,0.82);
  color: #fff;
  padding: 8px 10px;
  border-radius: 6px;
  font-size: 13px;
  line-height: 1.3;
  z-index: 20;
  box-shadow: 0 4px 10px rgba(0,0,0,0.3);
}
.product-card:hover .product-desc-overlay,
.product-card:focus .product-desc-overlay,
.product-card:focus-within .product-desc-overlay {
  display: block;
}
.product-desc-overlay p { margin: 0; white-space: normal; }
"#;

/// Root component: loads `config.toml`, then mounts the advisor.
#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<AppConfig>);

    spawn_local(async move {
        let page = page_href().unwrap_or_default();
        let config_url = skincare_advisor::catalog::resolve_url(&page, "config.toml")
            .map(|u| u.to_string())
            .unwrap_or_else(|_| "config.toml".to_string());
        let loaded = AppConfig::fetch(&reqwest::Client::new(), &config_url)
            .await
            .with_fallback_api_key(global_api_key());
        config.set(Some(loaded));
    });

    move || {
        config
            .get()
            .map(|config| view! { <Advisor config=config /> })
    }
}

#[component]
fn Advisor(config: AppConfig) -> impl IntoView {
    provide_layout_state(Direction::from_config(&config.ui.direction));
    provide_chat_state(config.completion.clone());
    let picker = provide_picker_state(LocalStorageSlot::new(config.storage.key.clone()));

    ensure_style(OVERLAY_STYLE_ID, OVERLAY_CSS);

    let layout = use_layout_state();
    Effect::new(move |_| {
        set_body_dir(layout.direction.get().as_str());
    });

    picker.load(CatalogSource {
        page: page_href().unwrap_or_default(),
        path: config.catalog.url.clone(),
    });

    view! {
        <main class="page-wrapper">
            <Controls ui=config.ui.clone() />
            <section class="search-section">
                <Filters />
            </section>
            <section class="products-section">
                <ProductGrid />
            </section>
            <section class="selected-products">
                <SelectedProducts />
            </section>
            <section class="chatbox">
                <Chat />
            </section>
        </main>
    }
}

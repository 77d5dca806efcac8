use leptos::prelude::*;

use skincare_advisor::config::UiConfig;

use crate::services::chat_service::use_chat_state;
use crate::services::layout_service::use_layout_state;
use crate::services::picker_service::use_picker_state;

/// Optional page controls, each enabled by `[ui]` config.
#[component]
pub fn Controls(ui: UiConfig) -> impl IntoView {
    let picker = use_picker_state();
    let chat = use_chat_state();
    let layout = use_layout_state();

    let clear_button = if ui.clear_selections_button {
        Some(view! {
            <button
                type="button"
                id="clearSelectionsBtn"
                on:click=move |_| {
                    picker.clear();
                    chat.announce_cleared();
                }
            >
                "Clear All"
            </button>
        })
    } else {
        log::info!("Clear-selections button disabled");
        None
    };

    let routine_button = if ui.generate_routine_button {
        Some(view! {
            <button
                type="button"
                id="generateRoutine"
                class="generate-btn"
                on:click=move |_| {
                    let selected = picker.picker.with_untracked(|p| p.selected_products());
                    chat.generate_routine(&selected);
                }
            >
                "Generate Routine"
            </button>
        })
    } else {
        log::info!("Generate-routine button disabled");
        None
    };

    let direction_button = if ui.direction_toggle {
        Some(view! {
            <button
                type="button"
                class="direction-toggle"
                style="position: fixed; top: 10px; right: 10px;"
                on:click=move |_| layout.toggle_direction()
            >
                "Toggle Direction"
            </button>
        })
    } else {
        log::info!("Direction toggle disabled");
        None
    };

    view! {
        <div class="controls">
            {clear_button}
            {routine_button}
            {direction_button}
        </div>
    }
}

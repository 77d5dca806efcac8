use leptos::prelude::*;

use skincare_advisor::view::ChatLine;

/// One conversation entry: a bold `role:` label, then the content lines
/// joined with `<br/>`.
#[component]
pub fn ChatMessage(line: ChatLine) -> impl IntoView {
    let ChatLine {
        class,
        role,
        lines,
        pending,
        ..
    } = line;

    let body = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            view! {
                {(i > 0).then(|| view! { <br /> })}
                {text}
            }
        })
        .collect_view();

    view! {
        <div class=class class:pending=pending aria-busy=pending.to_string()>
            <strong>{format!("{role}:")}</strong>
            " "
            {body}
        </div>
    }
}

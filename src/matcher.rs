//! Product-context matcher
//!
//! Finds catalog products mentioned by a chat message and builds the system
//! message that keeps the model's recommendations inside the catalog.

use crate::catalog::Product;
use crate::text::{keywords, normalize_text};

/// Maximum number of products listed in a context block.
pub const CONTEXT_LIMIT: usize = 10;

const ONLY_LISTED: &str = "IMPORTANT: Only use the products listed below when recommending items to the user. Do NOT invent, reference, or suggest products outside of this list.\n\n";

const NO_CATALOG: &str = "No product data available. The assistant should inform the user that no local products exist and not suggest external products.";

/// Products whose name, brand, category or description contains any
/// keyword (longer than two characters) of `query`.
pub fn match_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let normalized = normalize_text(query);
    let words = keywords(&normalized);
    if words.is_empty() {
        return Vec::new();
    }

    products
        .iter()
        .filter(|p| {
            let haystack = normalize_text(&format!(
                "{} {} {} {}",
                p.name, p.brand, p.category, p.description
            ));
            words.iter().any(|w| haystack.contains(w))
        })
        .collect()
}

fn context_line(product: &Product) -> String {
    let name = if product.name.is_empty() {
        "Unnamed"
    } else {
        product.name.as_str()
    };
    let mut line = format!("- {name}");
    if !product.brand.is_empty() {
        line.push_str(&format!(" ({})", product.brand));
    }
    if !product.category.is_empty() {
        line.push_str(&format!(" — {}", product.category));
    }
    if !product.description.is_empty() {
        line.push_str(&format!(": {}", product.description));
    }
    line
}

fn listing<'a>(products: impl Iterator<Item = &'a Product>) -> String {
    products
        .take(CONTEXT_LIMIT)
        .map(context_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Context block for a completion request.
///
/// Lists up to ten matched products, or up to ten catalog products when
/// nothing matched, or explains that no catalog is available.
pub fn build_context_block(matched: &[&Product], catalog: &[Product]) -> String {
    if !matched.is_empty() {
        let list = listing(matched.iter().copied());
        return format!(
            "{ONLY_LISTED}Products from local data matching the user's message (showing up to {CONTEXT_LIMIT}):\n{list}\n\n\
             When recommending, pick one or more items from the list above and explain why they match the user's needs. \
             If none of the products are an appropriate direct match, explicitly say \"No suitable product found in the provided list\" \
             and then suggest the best next alternatives drawn only from the list above (do not mention external brands or products)."
        );
    }

    if !catalog.is_empty() {
        let list = listing(catalog.iter());
        return format!(
            "{ONLY_LISTED}No exact matches found for the user's message. Here are some available products (up to {CONTEXT_LIMIT}):\n{list}\n\n\
             Please recommend any suitable options from this list only. If none are suitable, say \"No suitable product found in the provided list.\""
        );
    }

    NO_CATALOG.to_string()
}

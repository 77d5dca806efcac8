//! View models
//!
//! Pure projections of picker and conversation state. The frontend renders
//! these as-is and rebuilds them on every state change.

use crate::catalog::Product;
use crate::chat::ConversationEntry;
use crate::completion::MessageRole;
use crate::selection::SelectionStore;

pub const CATEGORY_PLACEHOLDER: &str = "Select a category to view products";
pub const NO_SELECTION: &str = "No products selected.";
pub const UNNAMED_PRODUCT: &str = "Unnamed product";

/// What the products container shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsView {
    Placeholder(&'static str),
    Cards(Vec<ProductCard>),
}

impl ProductsView {
    pub fn placeholder() -> Self {
        Self::Placeholder(CATEGORY_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub key: String,
    pub name: String,
    pub brand: String,
    pub image: String,
    /// Revealed in the hover/focus overlay.
    pub description: String,
    pub selected: bool,
}

pub fn products_view(products: &[&Product], selection: &SelectionStore) -> ProductsView {
    ProductsView::Cards(
        products
            .iter()
            .map(|p| ProductCard {
                key: p.key.clone(),
                name: p.name.clone(),
                brand: p.brand.clone(),
                image: p.image.clone(),
                description: p.description.clone(),
                selected: selection.contains(&p.key),
            })
            .collect(),
    )
}

/// Row of the removable selected-products list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub key: String,
    pub label: String,
}

/// Tile of the compact selected-products grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedThumb {
    pub key: String,
    pub name: String,
    pub image: String,
    pub alt: String,
}

/// Both selected-products views. Empty lists mean "No products selected."
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedSummary {
    pub list: Vec<SelectedItem>,
    pub grid: Vec<SelectedThumb>,
}

impl SelectedSummary {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

fn label_or_unnamed(name: &str) -> String {
    if name.is_empty() {
        UNNAMED_PRODUCT.to_string()
    } else {
        name.to_string()
    }
}

pub fn selected_summary(selection: &SelectionStore) -> SelectedSummary {
    let list = selection
        .products()
        .map(|p| SelectedItem {
            key: p.key.clone(),
            label: label_or_unnamed(&p.name),
        })
        .collect();
    let grid = selection
        .products()
        .map(|p| SelectedThumb {
            key: p.key.clone(),
            name: p.name.clone(),
            image: p.image.clone(),
            alt: label_or_unnamed(&p.name),
        })
        .collect();
    SelectedSummary { list, grid }
}

/// One rendered conversation entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLine {
    pub id: u64,
    pub class: &'static str,
    pub role: String,
    /// Content split on newlines; rendered with line breaks between.
    pub lines: Vec<String>,
    pub pending: bool,
}

pub fn role_class(role: &MessageRole) -> &'static str {
    match role {
        MessageRole::User => "user-msg",
        MessageRole::Assistant => "assistant-msg",
        MessageRole::System => "system-msg",
    }
}

pub fn chat_lines(entries: &[ConversationEntry]) -> Vec<ChatLine> {
    entries
        .iter()
        .map(|entry| ChatLine {
            id: entry.id.0,
            class: role_class(&entry.role),
            role: entry.role.to_string(),
            lines: entry.content.split('\n').map(String::from).collect(),
            pending: entry.pending,
        })
        .collect()
}

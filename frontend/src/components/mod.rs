pub mod chat;
pub mod controls;
pub mod filters;
pub mod product_grid;
pub mod selected_products;

//! Product catalog
//!
//! The catalog is a static `{ "products": [...] }` document served next to
//! the page. Products are immutable once loaded; each gets a derived `key`
//! that the selection store uses as its identity.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// A catalog product as published in `products.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Selection identity, derived when the catalog is built.
    #[serde(skip)]
    pub key: String,
    /// Published id; the document may use numbers or strings.
    #[serde(default, deserialize_with = "id_as_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Accepts string, number or null ids; empty strings count as absent.
pub(crate) fn id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.is_empty() => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            key: String::new(),
            id: None,
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            description: String::new(),
            image: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Identity for a product at `index`: the published id, or a slug of the
/// name (each whitespace run becomes `_`, leading and trailing runs too)
/// suffixed with the index.
pub fn derive_key(product: &Product, index: usize) -> String {
    if let Some(id) = &product.id {
        return id.clone();
    }
    let name = if product.name.is_empty() {
        "p".to_string()
    } else {
        underscore_whitespace(&product.name)
    };
    format!("{name}_{index}")
}

/// Replace every whitespace run with a single `_`, edges included.
fn underscore_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// The loaded product collection for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, deriving each product's key from its position.
    pub fn new(products: Vec<Product>) -> Self {
        let products = products
            .into_iter()
            .enumerate()
            .map(|(index, mut product)| {
                product.key = derive_key(&product, index);
                product
            })
            .collect();
        Self { products }
    }

    /// Parse a `{ "products": [...] }` document.
    pub fn from_json(body: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(body)?;
        Ok(Self::new(document.products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, key: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.key == key)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct non-empty categories in catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for product in &self.products {
            if !product.category.is_empty() && !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }
}

/// Resolve a page-relative path against the page location.
pub fn resolve_url(base: &str, path: &str) -> CatalogResult<url::Url> {
    let invalid = |source| CatalogError::InvalidUrl {
        url: path.to_string(),
        source,
    };
    match url::Url::parse(path) {
        Ok(absolute) => Ok(absolute),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = url::Url::parse(base).map_err(invalid)?;
            base.join(path).map_err(invalid)
        }
        Err(e) => Err(invalid(e)),
    }
}

/// Fetches the catalog document. No caching: every `load` is a request.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: reqwest::Client,
    url: url::Url,
}

impl CatalogLoader {
    pub fn new(client: reqwest::Client, url: url::Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &url::Url {
        &self.url
    }

    pub async fn load(&self) -> CatalogResult<Catalog> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        let catalog = Catalog::from_json(&body)?;
        log::info!("Loaded {} products from {}", catalog.len(), self.url);
        Ok(catalog)
    }
}

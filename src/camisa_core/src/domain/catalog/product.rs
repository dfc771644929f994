use serde::{Deserialize, Serialize};

use super::Price;

/// Sizes offered when a product does not list its own.
pub const DEFAULT_SIZES: [&str; 5] = ["P", "M", "G", "GG", "XG"];

/// A jersey as stored in the catalog JSON.
///
/// Field names follow the catalog file (`nome`, `liga`, `categoria`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "liga", default)]
    pub league: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "precos")]
    pub prices: Prices,
    #[serde(rename = "imagens", default)]
    pub images: Images,
    #[serde(rename = "opcoes", default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ProductOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(rename = "venda")]
    pub sale: Price,
    #[serde(rename = "promocional", default, skip_serializing_if = "Option::is_none")]
    pub promotional: Option<Price>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Images {
    #[serde(rename = "capa", default)]
    pub cover: String,
    #[serde(rename = "galeria", default)]
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductOptions {
    #[serde(rename = "tamanhos", default)]
    pub sizes: Vec<String>,
}

impl Product {
    /// The price the customer pays: the promotional price when there is one.
    pub fn effective_price(&self) -> Price {
        self.prices.promotional.unwrap_or(self.prices.sale)
    }

    pub fn is_on_sale(&self) -> bool {
        self.prices.promotional.is_some()
    }

    pub fn sizes(&self) -> Vec<&str> {
        match &self.options {
            Some(options) if !options.sizes.is_empty() => {
                options.sizes.iter().map(String::as_str).collect()
            }
            _ => DEFAULT_SIZES.to_vec(),
        }
    }

    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes().contains(&size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JERSEY: &str = r#"{
        "id": "flamengo-home-2024",
        "nome": "Flamengo Home 2024",
        "liga": "Brasileirão",
        "categoria": "Torcedor",
        "precos": { "venda": "249.90", "promocional": 199.9 },
        "imagens": { "capa": "capa.jpg", "galeria": ["1.jpg", "2.jpg"] },
        "opcoes": { "tamanhos": ["M", "G"] }
    }"#;

    #[test]
    fn reads_catalog_field_names() {
        let product: Product = serde_json::from_str(JERSEY).unwrap();
        assert_eq!(product.name, "Flamengo Home 2024");
        assert_eq!(product.league, "Brasileirão");
        assert_eq!(product.images.gallery.len(), 2);
        assert_eq!(product.sizes(), vec!["M", "G"]);
    }

    #[test]
    fn promotional_price_wins() {
        let product: Product = serde_json::from_str(JERSEY).unwrap();
        assert!(product.is_on_sale());
        assert_eq!(product.effective_price(), Price::from_centavos(19990));
    }

    #[test]
    fn falls_back_to_default_sizes() {
        let product: Product = serde_json::from_str(
            r#"{"id":"x","nome":"X","precos":{"venda":100}}"#,
        )
        .unwrap();
        assert_eq!(product.sizes(), DEFAULT_SIZES.to_vec());
        assert!(product.offers_size("GG"));
        assert!(!product.offers_size("XXL"));
        assert_eq!(product.effective_price(), Price::from_centavos(10000));
    }
}

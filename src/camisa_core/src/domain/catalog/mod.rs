//! Product catalog: the league menu, jersey listings and category filters.

pub mod league;
pub mod price;
pub mod product;

pub use league::{LEAGUES, League, league_display_name};
pub use price::{Price, PriceError};
pub use product::{DEFAULT_SIZES, Images, Prices, Product, ProductOptions};

/// Which category of jersey to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// Human-readable category name: `Retro_Kids` is shown as `Retro Kids`.
pub fn category_label(raw: &str) -> String {
    raw.replace('_', " ")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        distinct_categories(&self.products)
    }

    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Products of the league whose menu slug is `league_id`.
    ///
    /// Slugs missing from the menu are matched literally against the product's league.
    pub fn league(&self, league_id: &str) -> LeagueListing<'_> {
        let name = league_display_name(league_id).to_string();
        let products = self
            .products
            .iter()
            .filter(|product| product.league == name)
            .collect();

        LeagueListing {
            menu_entry: League::find(league_id),
            name,
            products,
        }
    }
}

/// The products of a single league, ready to be narrowed by category.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueListing<'a> {
    pub menu_entry: Option<&'static League>,
    pub name: String,
    pub products: Vec<&'a Product>,
}

impl<'a> LeagueListing<'a> {
    pub fn categories(&self) -> Vec<&'a str> {
        distinct_categories(self.products.iter().copied())
    }

    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&'a Product> {
        self.products
            .iter()
            .copied()
            .filter(|p| filter.matches(p))
            .collect()
    }
}

fn distinct_categories<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
    let mut seen: Vec<&'a str> = Vec::new();
    for product in products {
        if !seen.contains(&product.category.as_str()) {
            seen.push(product.category.as_str());
        }
    }
    seen
}

//! Product listing view models
//!
//! Turns `/api/products` items into cards ready to render: availability,
//! button state and a localized price label.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::api::{StorefrontApi, Transport};
use crate::config::Locale;

/// A product as returned by `/api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Missing or null stock counts as none; fractional stock is rounded down
    #[serde(default, deserialize_with = "lenient_stock")]
    pub stock_quantity: i64,
}

/// Body of `/api/products`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListing {
    #[serde(default)]
    items: Option<Vec<Value>>,
}

impl ProductListing {
    /// Decode every item, skipping records that are not products
    pub fn into_products(self) -> Vec<Product> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<Product>(item) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed product");
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    InStock(u64),
    Unavailable,
}

impl Availability {
    pub fn from_stock(stock_quantity: i64) -> Self {
        match u64::try_from(stock_quantity) {
            Ok(0) | Err(_) => Availability::Unavailable,
            Ok(n) => Availability::InStock(n),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Availability::InStock(n) => format!("In stock: {n}"),
            Availability::Unavailable => "Unavailable".to_string(),
        }
    }
}

/// Everything a front end needs to draw one product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_label: String,
    pub availability: Availability,
    pub button_label: &'static str,
    pub button_disabled: bool,
}

impl ProductCard {
    pub fn new(product: &Product, locale: Locale) -> Self {
        let availability = Availability::from_stock(product.stock_quantity);
        let available = matches!(availability, Availability::InStock(_));

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price_label: format_price(product.price, locale),
            availability,
            button_label: if available { "Add to cart" } else { "Unavailable" },
            button_disabled: !available,
        }
    }
}

/// What the product grid should show
#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    /// No products, or the listing could not be loaded
    Empty,
    Cards(Vec<ProductCard>),
}

impl Catalog {
    pub fn from_products(products: &[Product], locale: Locale) -> Self {
        if products.is_empty() {
            return Catalog::Empty;
        }
        Catalog::Cards(products.iter().map(|p| ProductCard::new(p, locale)).collect())
    }
}

/// Load the catalog, falling back to the empty state when the listing cannot be fetched
pub async fn load_catalog<T: Transport>(api: &StorefrontApi<T>, locale: Locale) -> Catalog {
    match api.products().await {
        Ok(products) => Catalog::from_products(&products, locale),
        Err(e) => {
            warn!(error = %e, "failed to load products");
            Catalog::Empty
        }
    }
}

/// Format a price with the locale's thousands separator, rounded to whole units
pub fn format_price(price: f64, locale: Locale) -> String {
    let rounded = price.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let (separator, digit_map): (char, fn(char) -> char) = match locale {
        Locale::En => (',', |c| c),
        Locale::Fa => ('\u{066C}', to_persian_digit),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit_map(c));
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn to_persian_digit(c: char) -> char {
    match c.to_digit(10) {
        // U+06F0 EXTENDED ARABIC-INDIC DIGIT ZERO
        Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
        None => c,
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
    })
}

fn lenient_stock<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<f64>::deserialize(deserializer)? {
        Some(n) if n.is_finite() => n.floor() as i64,
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(stock_quantity: i64) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Lamp".to_string(),
            description: None,
            price: 1250000.0,
            stock_quantity,
        }
    }

    #[test]
    fn test_sold_out_card_is_disabled() {
        let card = ProductCard::new(&product(0), Locale::En);
        assert_eq!(card.availability, Availability::Unavailable);
        assert!(card.button_disabled);
        assert_eq!(card.button_label, "Unavailable");
    }

    #[test]
    fn test_in_stock_card_is_enabled() {
        let card = ProductCard::new(&product(3), Locale::En);
        assert_eq!(card.availability, Availability::InStock(3));
        assert!(!card.button_disabled);
        assert_eq!(card.availability.label(), "In stock: 3");
    }

    #[test]
    fn test_negative_stock_is_unavailable() {
        assert_eq!(Availability::from_stock(-2), Availability::Unavailable);
    }

    #[test]
    fn test_format_price_english() {
        assert_eq!(format_price(0.0, Locale::En), "0");
        assert_eq!(format_price(999.0, Locale::En), "999");
        assert_eq!(format_price(1000.0, Locale::En), "1,000");
        assert_eq!(format_price(1250000.0, Locale::En), "1,250,000");
        assert_eq!(format_price(1234.6, Locale::En), "1,235");
        assert_eq!(format_price(-45000.0, Locale::En), "-45,000");
    }

    #[test]
    fn test_format_price_persian() {
        assert_eq!(format_price(1250000.0, Locale::Fa), "۱٬۲۵۰٬۰۰۰");
    }

    #[test]
    fn test_empty_listing_is_empty_catalog() {
        assert_eq!(Catalog::from_products(&[], Locale::En), Catalog::Empty);
    }

    #[test]
    fn test_listing_without_items_field() {
        let listing: ProductListing = serde_json::from_value(json!({})).unwrap();
        assert!(listing.into_products().is_empty());

        let listing: ProductListing = serde_json::from_value(json!({ "items": null })).unwrap();
        assert!(listing.into_products().is_empty());
    }

    #[test]
    fn test_numeric_ids_are_accepted() {
        let listing: ProductListing = serde_json::from_value(json!({
            "items": [
                { "id": 7, "name": "Mug", "description": "Blue", "price": 100, "stock_quantity": 1 }
            ]
        }))
        .unwrap();
        assert_eq!(listing.into_products()[0].id, "7");
    }

    #[test]
    fn test_bad_record_does_not_hide_the_rest() {
        let listing: ProductListing = serde_json::from_value(json!({
            "items": [
                { "id": "1", "name": "Good", "price": 10, "stock_quantity": 3 },
                { "id": "2", "name": "No price", "stock_quantity": 3 },
                "not a product"
            ]
        }))
        .unwrap();

        let products = listing.into_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Good");
    }

    #[test]
    fn test_null_or_fractional_stock() {
        let listing: ProductListing = serde_json::from_value(json!({
            "items": [
                { "id": "1", "name": "Null", "price": 10, "stock_quantity": null },
                { "id": "2", "name": "Missing", "price": 10 },
                { "id": "3", "name": "Half", "price": 10, "stock_quantity": 2.5 }
            ]
        }))
        .unwrap();

        let products = listing.into_products();
        assert_eq!(products.len(), 3);
        assert_eq!(Availability::from_stock(products[0].stock_quantity), Availability::Unavailable);
        assert_eq!(Availability::from_stock(products[1].stock_quantity), Availability::Unavailable);
        assert_eq!(products[2].stock_quantity, 2);
    }
}

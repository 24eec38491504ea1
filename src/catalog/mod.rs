//! In-memory catalog snapshot. `category_id` is the source of truth for the
//! product/category relationship; the display name is a projection resolved
//! at fetch time, so a category rename shows up on the next snapshot.

mod sync;

pub use sync::{CatalogBackend, CatalogChange};

use crate::models::{Category, Product, ProductResponse};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn product(&self, id: i32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn category_named(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Resolves a product's display category from its `category_id`.
    pub fn category_name(categories: &[Category], category_id: Option<i32>) -> Option<String> {
        let id = category_id?;
        categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.clone())
    }

    /// Products in storefront shape, category names projected.
    pub fn display_products(&self) -> Vec<ProductResponse> {
        self.products
            .iter()
            .map(|product| ProductResponse {
                category: Self::category_name(&self.categories, product.category_id),
                product: product.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::dec;
    use sqlx::types::Json;

    pub(super) fn product(id: i32, name: &str, category_id: Option<i32>) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: dec!(100),
            original_price: None,
            images: vec![],
            badge: None,
            materials: vec![],
            tagline: None,
            description: None,
            category_id,
            variants: Json(vec![]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    pub(super) fn category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            image: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn display_products_project_the_category_name() {
        let catalog = Catalog::new(
            vec![product(1, "Brass Diya", Some(10)), product(2, "Incense", None)],
            vec![category(10, "Pooja Items")],
        );

        let display = catalog.display_products();
        assert_eq!(display[0].category.as_deref(), Some("Pooja Items"));
        assert_eq!(display[1].category, None);
    }

    #[test]
    fn category_rename_is_reflected_on_the_next_snapshot() {
        let products = vec![product(1, "Brass Diya", Some(10))];

        let before = Catalog::new(products.clone(), vec![category(10, "Pooja Items")]);
        assert_eq!(
            before.display_products()[0].category.as_deref(),
            Some("Pooja Items")
        );

        // Rename only touches the categories table; the projection follows.
        let after = Catalog::new(products, vec![category(10, "Divine Decor")]);
        assert_eq!(
            after.display_products()[0].category.as_deref(),
            Some("Divine Decor")
        );
    }

    #[test]
    fn lookup_by_id_and_name() {
        let catalog = Catalog::new(
            vec![product(1, "Brass Diya", Some(10))],
            vec![category(10, "Pooja Items")],
        );

        assert!(catalog.product(1).is_some());
        assert!(catalog.product(99).is_none());
        assert_eq!(catalog.category_named("Pooja Items").map(|c| c.id), Some(10));
    }
}

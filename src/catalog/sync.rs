use crate::error::Result;
use crate::models::{Category, Product};

use super::Catalog;

/// A single admin mutation against the catalog.
#[derive(Debug, Clone)]
pub enum CatalogChange {
    UpsertProduct(Product),
    DeleteProduct(i32),
    UpsertCategory(Category),
    DeleteCategory(i32),
}

/// Persistence collaborator for [`Catalog::apply`].
#[allow(async_fn_in_trait)]
pub trait CatalogBackend {
    async fn persist(&self, change: &CatalogChange) -> Result<()>;
    async fn fetch(&self) -> Result<Catalog>;
}

impl Catalog {
    fn apply_local(&mut self, change: &CatalogChange) {
        match change {
            CatalogChange::UpsertProduct(product) => {
                match self.products.iter_mut().find(|p| p.id == product.id) {
                    Some(existing) => *existing = product.clone(),
                    // New products go to the front, newest-first like the fetch order.
                    None => self.products.insert(0, product.clone()),
                }
            }
            CatalogChange::DeleteProduct(id) => {
                self.products.retain(|product| product.id != *id);
            }
            CatalogChange::UpsertCategory(category) => {
                match self.categories.iter_mut().find(|c| c.id == category.id) {
                    Some(existing) => *existing = category.clone(),
                    None => self.categories.push(category.clone()),
                }
            }
            CatalogChange::DeleteCategory(id) => {
                self.categories.retain(|category| category.id != *id);
            }
        }
    }

    /// Three-phase optimistic mutation: apply the tentative local state,
    /// persist through the backend, and on failure discard the tentative
    /// state by re-reading the authoritative snapshot. The write error is
    /// returned either way.
    pub async fn apply<B: CatalogBackend>(
        &mut self,
        change: CatalogChange,
        backend: &B,
    ) -> Result<()> {
        self.apply_local(&change);

        match backend.persist(&change).await {
            Ok(()) => Ok(()),
            Err(err) => {
                match backend.fetch().await {
                    Ok(fresh) => *self = fresh,
                    Err(refetch_err) => {
                        tracing::error!(
                            "Failed to restore catalog after write error: {}",
                            refetch_err
                        );
                    }
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{category, product};
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted double: fails the first `fail_writes` persists and always
    /// serves a fixed authoritative snapshot.
    struct ScriptedBackend {
        fail_writes: usize,
        writes: AtomicUsize,
        authoritative: Catalog,
    }

    impl CatalogBackend for ScriptedBackend {
        async fn persist(&self, _change: &CatalogChange) -> Result<()> {
            let n = self.writes.fetch_add(1, Ordering::SeqCst);
            if n < self.fail_writes {
                Err(AppError::InternalError("write refused".to_string()))
            } else {
                Ok(())
            }
        }

        async fn fetch(&self) -> Result<Catalog> {
            Ok(self.authoritative.clone())
        }
    }

    #[tokio::test]
    async fn successful_apply_keeps_the_tentative_state() {
        let backend = ScriptedBackend {
            fail_writes: 0,
            writes: AtomicUsize::new(0),
            authoritative: Catalog::default(),
        };

        let mut catalog = Catalog::default();
        catalog
            .apply(CatalogChange::UpsertProduct(product(1, "Brass Diya", None)), &backend)
            .await
            .unwrap();

        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.products()[0].name, "Brass Diya");
    }

    #[tokio::test]
    async fn failed_write_rolls_back_to_the_authoritative_snapshot() {
        let authoritative = Catalog::new(
            vec![product(1, "Brass Diya", None)],
            vec![category(10, "Pooja Items")],
        );
        let backend = ScriptedBackend {
            fail_writes: 1,
            writes: AtomicUsize::new(0),
            authoritative: authoritative.clone(),
        };

        let mut catalog = authoritative.clone();
        let err = catalog
            .apply(CatalogChange::UpsertProduct(product(2, "Ghost", None)), &backend)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InternalError(_)));
        // The tentative product is gone again.
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.products()[0].id, 1);
    }

    #[tokio::test]
    async fn upserts_replace_in_place_and_deletes_retain() {
        let backend = ScriptedBackend {
            fail_writes: 0,
            writes: AtomicUsize::new(0),
            authoritative: Catalog::default(),
        };

        let mut catalog = Catalog::new(
            vec![product(1, "Brass Diya", None)],
            vec![category(10, "Pooja Items")],
        );

        catalog
            .apply(CatalogChange::UpsertProduct(product(1, "Brass Diya XL", None)), &backend)
            .await
            .unwrap();
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.products()[0].name, "Brass Diya XL");

        catalog
            .apply(CatalogChange::DeleteCategory(10), &backend)
            .await
            .unwrap();
        assert!(catalog.categories().is_empty());
    }
}

use std::sync::Arc;

use crate::models::product::{BaseProduct, NewProduct, ProductError, ProductKind, SharedProduct};

/// Most products a catalog can hold. Menu numbers above it are taken
/// (9 opens the cart).
pub const MAX_PRODUCTS: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ProductError),

    #[error("Catalog has {count} products, at most {max} fit on the menu")]
    TooManyProducts { count: usize, max: usize },
}

/// The store's fixed, ordered product list. Positions are 1-indexed as
/// shown to customers, and never exceed `MAX_PRODUCTS`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<BaseProduct>>,
}

impl Catalog {
    /// The five products the store opens with.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_requests(vec![
            NewProduct::new(ProductKind::Phone, "iPhone 16", "Teal", 900.0),
            NewProduct::new(ProductKind::Thermos, "Stanley 500ml Thermos", "Gray", 30.0),
            NewProduct::new(ProductKind::Bracelet, "Friendship Bracelet", "Silver", 20.0),
            NewProduct::new(ProductKind::Phone, "Samsung S24", "Purple", 800.0),
            NewProduct::new(ProductKind::Bracelet, "Sunset Bracelet", "Gold", 50.0),
        ])
    }

    pub fn from_requests(requests: Vec<NewProduct>) -> Result<Self, CatalogError> {
        if requests.len() > MAX_PRODUCTS {
            return Err(CatalogError::TooManyProducts {
                count: requests.len(),
                max: MAX_PRODUCTS,
            });
        }

        let products = requests
            .into_iter()
            .map(|request| BaseProduct::new(request).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Catalog created with {} products", products.len());
        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by its 1-indexed position.
    pub fn get(&self, position: usize) -> Option<SharedProduct> {
        let index = position.checked_sub(1)?;
        self.products
            .get(index)
            .map(|product| Arc::clone(product) as SharedProduct)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BaseProduct> {
        self.products.iter().map(|product| product.as_ref())
    }
}

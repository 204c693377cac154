use crate::domain::model::ProductId;
use crate::utils::error::StoreError;
use thiserror::Error;

/// The cart operation a failure came from; selects the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            CartOperation::Add => "Failed to add product",
            CartOperation::Remove => "Failed to remove product",
            CartOperation::UpdateAmount => "Failed to update product amount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartErrorKind {
    StockExceeded,
    ProductNotInCart,
    FetchFailure,
    PersistFailure,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Requested {requested} of product {product_id}, only {available} in stock")]
    StockExceeded {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    #[error("Product {0} is not in the cart")]
    ProductNotInCart(ProductId),

    #[error("Could not fetch product {product_id}: {reason}")]
    FetchFailure { product_id: ProductId, reason: String },

    #[error("Could not persist cart: {reason}")]
    PersistFailure { reason: String },
}

pub const OUT_OF_STOCK_MESSAGE: &str = "Requested quantity is out of stock";

impl CartError {
    pub fn fetch(product_id: ProductId, source: &StoreError) -> Self {
        CartError::FetchFailure {
            product_id,
            reason: source.to_string(),
        }
    }

    pub fn persist(source: impl std::fmt::Display) -> Self {
        CartError::PersistFailure {
            reason: source.to_string(),
        }
    }

    pub fn kind(&self) -> CartErrorKind {
        match self {
            CartError::StockExceeded { .. } => CartErrorKind::StockExceeded,
            CartError::ProductNotInCart(_) => CartErrorKind::ProductNotInCart,
            CartError::FetchFailure { .. } => CartErrorKind::FetchFailure,
            CartError::PersistFailure { .. } => CartErrorKind::PersistFailure,
        }
    }

    pub fn user_friendly_message(&self, operation: CartOperation) -> &'static str {
        match self {
            CartError::StockExceeded { .. } => OUT_OF_STOCK_MESSAGE,
            _ => operation.failure_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_exceeded_has_its_own_message() {
        let err = CartError::StockExceeded {
            product_id: 1,
            requested: 6,
            available: 5,
        };
        assert_eq!(err.kind(), CartErrorKind::StockExceeded);
        assert_eq!(
            err.user_friendly_message(CartOperation::UpdateAmount),
            OUT_OF_STOCK_MESSAGE
        );
        assert_eq!(
            err.to_string(),
            "Requested 6 of product 1, only 5 in stock"
        );
    }

    #[test]
    fn test_other_failures_use_operation_message() {
        let err = CartError::ProductNotInCart(4);
        assert_eq!(
            err.user_friendly_message(CartOperation::Remove),
            "Failed to remove product"
        );

        let err = CartError::fetch(
            2,
            &StoreError::NotFound {
                resource: "stock".to_string(),
                id: 2,
            },
        );
        assert_eq!(err.kind(), CartErrorKind::FetchFailure);
        assert_eq!(
            err.user_friendly_message(CartOperation::Add),
            "Failed to add product"
        );
        assert_eq!(err.to_string(), "Could not fetch product 2: stock 2 not found");
    }
}

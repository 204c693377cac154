use crate::core::{Cart, CatalogSource, Product, ProductId, Result};
use serde::Serialize;

/// A catalog product with the amount of it currently in the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub in_cart: u32,
}

/// Fetches the catalog in API order and pairs each product with its cart amount.
pub async fn list_products<C: CatalogSource + ?Sized>(
    catalog: &C,
    cart: &Cart,
) -> Result<Vec<ListedProduct>> {
    let products = catalog.list_products().await?;
    tracing::debug!("Fetched {} products", products.len());

    let amounts = cart.items_amount();
    Ok(products
        .into_iter()
        .map(|product| {
            let in_cart = amounts.get(&product.id).copied().unwrap_or(0);
            ListedProduct { product, in_cart }
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub amount: u32,
    pub subtotal: f64,
}

/// Per-line subtotals and the cart total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<SummaryLine>,
    pub total_items: u64,
    pub total: f64,
}

impl CartSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| SummaryLine {
                id: line.id(),
                title: line.product.title.clone(),
                price: line.product.price,
                amount: line.amount,
                subtotal: line.subtotal(),
            })
            .collect();

        Self {
            lines,
            total_items: cart.total_items(),
            total: cart.total(),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type ProductId = u64;

/// Catalog entry as served by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    /// Checks what the cart relies on: a finite, non-negative price.
    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("product {} has an invalid price", self.id));
        }
        Ok(())
    }
}

/// Available quantity as served by `GET /stock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub id: ProductId,
    pub amount: u32,
}

/// A product plus how many of it are in the cart. Serialized flat:
/// `{id, title, price, image, amount}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}

/// Insertion-ordered cart lines, at most one per product id, every amount >= 1.
///
/// Deserialization rejects snapshots that break those rules, so a `Cart`
/// obtained from storage always satisfies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.id() == id)
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn amount_of(&self, id: ProductId) -> Option<u32> {
        self.get(id).map(|line| line.amount)
    }

    /// Product id -> amount, for badges on the product listing.
    pub fn items_amount(&self) -> HashMap<ProductId, u32> {
        self.lines
            .iter()
            .map(|line| (line.id(), line.amount))
            .collect()
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.amount)).sum()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Appends a new line with amount 1. Returns false if the id is already present.
    pub(crate) fn push_new(&mut self, product: Product) -> bool {
        if self.position(product.id).is_some() {
            return false;
        }
        self.lines.push(CartLine::new(product));
        true
    }

    /// Returns false if the id is absent or `amount` is zero.
    pub(crate) fn set_amount(&mut self, id: ProductId, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        match self.lines.iter_mut().find(|line| line.id() == id) {
            Some(line) => {
                line.amount = amount;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.position(id)?;
        Some(self.lines.remove(index))
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_json(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = String;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        let mut cart = Cart::new();
        for line in lines {
            if line.amount == 0 {
                return Err(format!("product {} has amount 0", line.id()));
            }
            line.product.validate()?;
            if cart.position(line.id()).is_some() {
                return Err(format!("product {} appears more than once", line.id()));
            }
            cart.lines.push(line);
        }
        Ok(cart)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

use crate::error::ConstraintViolation;
use crate::validation::{
    validate_base_price, validate_percent, validate_text, ValidationResult, MAX_PERCENT,
};

/// `base_price * (1 - discount/100)`, never below zero.
pub fn sale_price_for(base_price: f64, discount: f64) -> f64 {
    let price = base_price * (1.0 - discount / 100.0);
    if price < 0.0 {
        0.0
    } else {
        price
    }
}

/// One priced item.
///
/// The numeric fields are private so that `sale_price` can never go stale:
/// the only way to change `base_price` or `discount` is through a setter that
/// validates the new value and recomputes the sale price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    code: u32,
    pub name: String,
    pub kind: String,
    base_price: f64,
    discount: f64,
    sale_price: f64,
}

impl Product {
    pub fn new(
        code: u32,
        name: impl Into<String>,
        kind: impl Into<String>,
        base_price: f64,
        discount: f64,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let kind = kind.into();
        validate_text("name", &name)?;
        validate_text("type", &kind)?;
        validate_base_price(base_price)?;
        validate_percent(discount)?;
        Ok(Self {
            code,
            name,
            kind,
            base_price,
            discount,
            sale_price: sale_price_for(base_price, discount),
        })
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn sale_price(&self) -> f64 {
        self.sale_price
    }

    pub fn set_base_price(&mut self, base_price: f64) -> ValidationResult<()> {
        validate_base_price(base_price)?;
        self.base_price = base_price;
        self.recompute();
        Ok(())
    }

    pub fn set_discount(&mut self, discount: f64) -> ValidationResult<()> {
        validate_percent(discount)?;
        self.discount = discount;
        self.recompute();
        Ok(())
    }

    /// Overwrites the discount with `percent`, capped at 100.
    pub(crate) fn apply_discount(&mut self, percent: f64) -> ValidationResult<()> {
        self.set_discount(percent.min(MAX_PERCENT))
    }

    fn recompute(&mut self) {
        self.sale_price = sale_price_for(self.base_price, self.discount);
    }
}

/// The record store: an ordered list of products with unique codes.
///
/// Order is meaningful: it is the order records are displayed and saved in,
/// and it only changes through an explicit sort or a removal.
#[derive(Debug, Default, Clone)]
pub struct PriceList {
    products: Vec<Product>,
}

impl PriceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn contains_code(&self, code: u32) -> bool {
        self.products.iter().any(|p| p.code == code)
    }

    pub fn get(&self, code: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Appends a product, rejecting a code that is already present.
    pub fn insert(&mut self, product: Product) -> ValidationResult<()> {
        if self.contains_code(product.code) {
            return Err(ConstraintViolation::DuplicateCode(product.code));
        }
        self.products.push(product);
        Ok(())
    }

    /// Replaces the whole contents. Callers guarantee unique codes; the loader
    /// drops duplicates before getting here.
    pub(crate) fn replace_all(&mut self, products: Vec<Product>) {
        debug_assert!({
            let mut codes: Vec<u32> = products.iter().map(|p| p.code).collect();
            codes.sort_unstable();
            codes.windows(2).all(|w| w[0] != w[1])
        });
        self.products = products;
    }

    /// Removes every product matching `pred`, returning them in their former order.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<Product>
    where
        F: FnMut(&Product) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.products).into_iter().partition(|p| pred(p));
        self.products = kept;
        removed
    }

    /// Mutable access for bulk updates. Codes are read-only on `Product`, so
    /// uniqueness cannot be broken through this.
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Product> {
        self.products.iter_mut()
    }

    pub fn sort_by_code(&mut self) {
        self.products.sort_by_key(|p| p.code);
    }

    pub fn sort_by_sale_price(&mut self) {
        self.products.sort_by(|a, b| a.sale_price.total_cmp(&b.sale_price));
    }
}

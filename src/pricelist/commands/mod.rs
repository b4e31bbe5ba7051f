use crate::codec::Rejection;
use crate::config::PriceListConfig;
use crate::model::Product;

pub mod add;
pub mod config;
pub mod delete;
pub mod discount;
pub mod find;
pub mod list;
pub mod load;
pub mod prune;
pub mod save;
pub mod search;
pub mod sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a query found.
///
/// `Table(vec![])` is a real (header-only) table, e.g. displaying an empty
/// list. `NothingFound` means a lookup matched nothing and no table should be
/// drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Table(Vec<Product>),
    NothingFound,
}

impl Listing {
    /// `NothingFound` for an empty match set, a table otherwise.
    pub fn from_matches(products: Vec<Product>) -> Self {
        if products.is_empty() {
            Listing::NothingFound
        } else {
            Listing::Table(products)
        }
    }

    pub fn products(&self) -> &[Product] {
        match self {
            Listing::Table(products) => products,
            Listing::NothingFound => &[],
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products added, removed or updated by the command.
    pub affected_products: Vec<Product>,
    pub listing: Option<Listing>,
    /// Lines skipped while loading.
    pub rejections: Vec<Rejection>,
    pub config: Option<PriceListConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_rejections(mut self, rejections: Vec<Rejection>) -> Self {
        self.rejections = rejections;
        self
    }

    pub fn with_config(mut self, config: PriceListConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// A product as entered by a user, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub code: u32,
    pub name: String,
    pub kind: String,
    pub base_price: f64,
    pub discount: f64,
}

impl NewProduct {
    pub fn new(
        code: u32,
        name: impl Into<String>,
        kind: impl Into<String>,
        base_price: f64,
        discount: f64,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            kind: kind.into(),
            base_price,
            discount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Code,
    SalePrice,
}

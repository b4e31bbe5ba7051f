use super::Backend;
use crate::error::{PriceListError, Result};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

const LOCATION: &str = "<memory>";

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    content: Option<String>,
    simulate_write_error: bool,
}

impl MemoryBackend {
    /// An empty backend: reads fail as if the file did not exist.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            simulate_write_error: false,
        }
    }

    /// Make subsequent writes fail, for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn unavailable(kind: ErrorKind, msg: &str) -> PriceListError {
        PriceListError::SourceUnavailable {
            path: PathBuf::from(LOCATION),
            source: Error::new(kind, msg.to_string()),
        }
    }
}

impl Backend for MemoryBackend {
    fn read(&self) -> Result<String> {
        self.content
            .clone()
            .ok_or_else(|| Self::unavailable(ErrorKind::NotFound, "no content"))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(Self::unavailable(
                ErrorKind::PermissionDenied,
                "simulated write error",
            ));
        }
        self.content = Some(text.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }

    fn exists(&self) -> bool {
        self.content.is_some()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{PriceList, Product};

    /// Builds a price list in a known state.
    #[derive(Default)]
    pub struct ListFixture {
        pub list: PriceList,
    }

    impl ListFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_product(
            mut self,
            code: u32,
            name: &str,
            kind: &str,
            base_price: f64,
            discount: f64,
        ) -> Self {
            let product = Product::new(code, name, kind, base_price, discount).unwrap();
            self.list.insert(product).unwrap();
            self
        }

        /// Five products across three types, in non-sorted code order.
        pub fn with_sample_catalog(self) -> Self {
            self.with_product(3, "Hammer", "Tools", 12.5, 10.0)
                .with_product(1, "Screwdriver", "Tools", 4.0, 0.0)
                .with_product(5, "Glue", "Supplies", 2.5, 0.0)
                .with_product(2, "Nails", "Hardware", 1.0, 50.0)
                .with_product(4, "Saw", "Tools", 30.0, 20.0)
        }

        pub fn build(self) -> PriceList {
            self.list
        }
    }
}

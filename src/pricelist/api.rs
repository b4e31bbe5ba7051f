//! # API Facade
//!
//! A thin layer over [`crate::commands`]: one method per operation, each
//! returning `Result<CmdResult>`. Both the one-shot CLI and the interactive
//! menu go through it.
//!
//! The facade owns the in-memory [`PriceList`] and the [`Backend`] it is
//! loaded from and saved to. It does no printing and no formatting.
//!
//! `PriceListApi<B: Backend>` is generic over the backend:
//! - Production: `PriceListApi<FileBackend>`
//! - Testing: `PriceListApi<MemoryBackend>`
//!
//! Tests here check that each method reaches the right command and keeps
//! the list and backend in step. Command logic is tested in the command
//! modules.

use crate::commands;
use crate::error::Result;
use crate::model::{PriceList, Product};
use crate::store::Backend;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, Listing, MessageLevel, NewProduct, SortKey};

pub struct PriceListApi<B: Backend> {
    list: PriceList,
    backend: B,
}

impl<B: Backend> PriceListApi<B> {
    /// Starts with an empty list. Nothing is read until [`Self::load`].
    pub fn new(backend: B) -> Self {
        Self {
            list: PriceList::new(),
            backend,
        }
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        commands::load::run(&mut self.list, &self.backend)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&self.list, &mut self.backend)
    }

    pub fn check(&self) -> Result<CmdResult> {
        commands::load::check(&self.backend)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.list)
    }

    pub fn add(&mut self, product: NewProduct) -> Result<CmdResult> {
        commands::add::run(&mut self.list, product)
    }

    pub fn delete(&mut self, code: u32) -> Result<CmdResult> {
        commands::delete::run(&mut self.list, code)
    }

    pub fn sort(&mut self, key: SortKey) -> Result<CmdResult> {
        commands::sort::run(&mut self.list, key)
    }

    pub fn find(&self, code: u32) -> Result<CmdResult> {
        commands::find::run(&self.list, code)
    }

    pub fn search(&self, needle: &str) -> Result<CmdResult> {
        commands::search::run(&self.list, needle)
    }

    pub fn apply_discount(&mut self, percent: f64, types: &[String]) -> Result<CmdResult> {
        commands::discount::run(&mut self.list, percent, types)
    }

    pub fn prune(&mut self, threshold: f64) -> Result<CmdResult> {
        commands::prune::run(&mut self.list, threshold)
    }

    pub fn products(&self) -> &[Product] {
        self.list.products()
    }

    pub fn has_code(&self, code: u32) -> bool {
        self.list.contains_code(code)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Shows or changes the config in `config_dir`. Independent of any price list.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PriceListError;
    use crate::store::memory::MemoryBackend;

    fn api_with(content: &str) -> PriceListApi<MemoryBackend> {
        PriceListApi::new(MemoryBackend::with_content(content))
    }

    #[test]
    fn starts_empty_until_loaded() {
        let mut api = api_with("1;A;T;10;0\n");
        assert!(api.products().is_empty());
        api.load().unwrap();
        assert_eq!(api.products().len(), 1);
        assert!(api.has_code(1));
    }

    #[test]
    fn load_keeps_first_of_duplicate_codes() {
        let mut api = api_with("1;Widget;Tool;10.00;10\n1;Gadget;Tool;5.00;0\n");
        let result = api.load().unwrap();
        assert_eq!(api.products().len(), 1);
        assert_eq!(api.products()[0].name, "Widget");
        assert!((api.products()[0].sale_price() - 9.0).abs() < 1e-9);
        assert_eq!(result.rejections.len(), 1);
        assert_eq!(result.rejections[0].line, 2);
    }

    #[test]
    fn failed_load_keeps_current_list() {
        let mut api = PriceListApi::new(MemoryBackend::new());
        api.add(NewProduct::new(1, "A", "T", 1.0, 0.0)).unwrap();
        let err = api.load().unwrap_err();
        assert!(matches!(err, PriceListError::SourceUnavailable { .. }));
        assert_eq!(api.products().len(), 1);
    }

    #[test]
    fn mutations_reach_the_backend_only_on_save() {
        let mut api = api_with("1;A;T;10;0\n2;B;U;20;50\n");
        api.load().unwrap();
        api.delete(1).unwrap();
        api.add(NewProduct::new(3, "C", "T", 5.0, 0.0)).unwrap();
        assert_eq!(api.backend().content(), Some("1;A;T;10;0\n2;B;U;20;50\n"));

        api.save().unwrap();
        assert_eq!(api.backend().content(), Some("2;B;U;20;50\n3;C;T;5;0\n"));
    }

    #[test]
    fn queries_go_through_the_list() {
        let mut api = api_with("2;Saw;Tools;30;0\n1;Glue;Supplies;2.5;0\n");
        api.load().unwrap();

        api.sort(SortKey::Code).unwrap();
        assert_eq!(api.products()[0].code(), 1);

        assert_eq!(api.find(9).unwrap().listing, Some(Listing::NothingFound));
        assert_eq!(api.search("Sup").unwrap().listing.unwrap().products().len(), 1);

        api.apply_discount(50.0, &["Tools".to_string()]).unwrap();
        let saw = api.find(2).unwrap().listing.unwrap();
        assert_eq!(saw.products()[0].sale_price(), 15.0);

        api.prune(10.0).unwrap();
        assert_eq!(api.list().unwrap().listing.unwrap().products().len(), 1);
    }

    #[test]
    fn check_does_not_touch_the_list() {
        let api = api_with("1;A;T;10;0\nbad\n");
        let result = api.check().unwrap();
        assert_eq!(result.rejections.len(), 1);
        assert!(api.products().is_empty());
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PriceList;
use crate::validation::validate_percent;
use std::collections::HashSet;
use tracing::debug;

/// Sets the discount of every product whose type is in `types` to `percent`.
///
/// The discount is overwritten, not compounded. An out-of-range percent is
/// rejected before any product is touched.
pub fn run(list: &mut PriceList, percent: f64, types: &[String]) -> Result<CmdResult> {
    validate_percent(percent)?;
    let wanted: HashSet<&str> = types.iter().map(String::as_str).collect();

    let mut updated = Vec::new();
    for product in list.iter_mut() {
        if wanted.contains(product.kind.as_str()) {
            product.apply_discount(percent)?;
            updated.push(product.clone());
        }
    }
    debug!(percent, updated = updated.len(), "Applied discount");

    let mut result = CmdResult::default();
    if updated.is_empty() {
        result.add_message(CmdMessage::info("No products of the given types"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Discount of {}% applied to {} product(s)",
            percent,
            updated.len()
        )));
    }
    Ok(result.with_affected_products(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConstraintViolation, PriceListError};
    use crate::store::memory::fixtures::ListFixture;

    fn types(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn only_listed_types_change() {
        let mut list = ListFixture::new()
            .with_product(1, "One", "A", 100.0, 10.0)
            .with_product(2, "Two", "B", 100.0, 10.0)
            .with_product(3, "Three", "A", 50.0, 0.0)
            .build();
        let result = run(&mut list, 30.0, &types(&["A"])).unwrap();
        assert_eq!(result.affected_products.len(), 2);

        let a = list.get(1).unwrap();
        assert_eq!(a.discount(), 30.0);
        assert!((a.sale_price() - 70.0).abs() < 1e-9);
        let a2 = list.get(3).unwrap();
        assert!((a2.sale_price() - 35.0).abs() < 1e-9);

        let b = list.get(2).unwrap();
        assert_eq!(b.discount(), 10.0);
        assert!((b.sale_price() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn overwrites_instead_of_compounding() {
        let mut list = ListFixture::new().with_sample_catalog().build();
        run(&mut list, 5.0, &types(&["Hardware"])).unwrap();
        // Nails had 50%
        assert_eq!(list.get(2).unwrap().discount(), 5.0);
        assert!((list.get(2).unwrap().sale_price() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn full_discount_is_allowed() {
        let mut list = ListFixture::new().with_sample_catalog().build();
        run(&mut list, 100.0, &types(&["Tools"])).unwrap();
        for code in [1, 3, 4] {
            assert_eq!(list.get(code).unwrap().sale_price(), 0.0);
        }
    }

    #[test]
    fn out_of_range_percent_changes_nothing() {
        let mut list = ListFixture::new().with_sample_catalog().build();
        let before = list.products().to_vec();
        for bad in [-1.0, 100.01, f64::NAN] {
            let err = run(&mut list, bad, &types(&["Tools"])).unwrap_err();
            assert!(matches!(err, PriceListError::Constraint(_)));
        }
        let err = run(&mut list, 150.0, &types(&["Tools"])).unwrap_err();
        assert!(matches!(
            err,
            PriceListError::Constraint(ConstraintViolation::DiscountOutOfRange(_))
        ));
        assert_eq!(list.products(), before.as_slice());
    }

    #[test]
    fn unknown_types_update_nothing() {
        let mut list = ListFixture::new().with_sample_catalog().build();
        let result = run(&mut list, 15.0, &types(&["tools", "Food"])).unwrap();
        assert!(result.affected_products.is_empty());
        assert_eq!(list.get(3).unwrap().discount(), 10.0);
    }

    #[test]
    fn several_types_at_once() {
        let mut list = ListFixture::new().with_sample_catalog().build();
        let result = run(&mut list, 20.0, &types(&["Supplies", "Hardware"])).unwrap();
        let mut codes: Vec<u32> = result.affected_products.iter().map(|p| p.code()).collect();
        codes.sort();
        assert_eq!(codes, vec![2, 5]);
    }
}

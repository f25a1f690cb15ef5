//! SOLID Principles: legacy and refactored scenarios for each principle.
//!
//! Every module holds two scenarios. The `legacy` submodule shows the
//! design that violates the principle; the top-level types of the module are
//! the corrected design. Each scenario is also an [`Example`] so the runner
//! can print both halves.
//!
//! # Pages
//!
//! ```text
//! srp  Employee Manager, Handler
//! ocp  Insurance Premium Discount calculator, Area calculator
//! lsp  Product Discount, Polygon
//! isp  Printer Scanner Fax Machine, Gesture
//! dip  Ecommerce Application, Storage
//! ```
//!
//! # Example
//!
//! ```
//! use solid_core::{ExampleRunner, ExecutionContext, Principle, RunConfig, Variant};
//!
//! let runner = ExampleRunner::new(solid_principles::default_examples());
//! let config = RunConfig {
//!     principles: vec![Principle::Ocp],
//!     examples: vec!["ocp.area".to_string()],
//!     variants: vec![Variant::Refactored],
//!     ..RunConfig::default()
//! };
//!
//! let reports = runner.run(&config, &ExecutionContext::new()).unwrap();
//! assert_eq!(reports[0].lines, vec!["100.0", "314.1592653589793"]);
//! ```

pub mod dip;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

use solid_core::{Example, Principle};

/// Every scenario, in page order `srp → ocp → lsp → isp → dip`.
pub fn default_examples() -> Vec<Box<dyn Example>> {
    vec![
        Box::new(srp::EmployeeExample),
        Box::new(srp::HandlerExample),
        Box::new(ocp::InsuranceExample),
        Box::new(ocp::AreaExample),
        Box::new(lsp::ProductDiscountExample),
        Box::new(lsp::PolygonExample),
        Box::new(isp::OfficeDeviceExample),
        Box::new(isp::GestureExample),
        Box::new(dip::EcommerceExample),
        Box::new(dip::StorageExample),
    ]
}

pub fn examples_for(principle: Principle) -> Vec<Box<dyn Example>> {
    default_examples()
        .into_iter()
        .filter(|e| e.principle() == principle)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_two_examples_per_principle() {
        for principle in Principle::ALL {
            assert_eq!(examples_for(principle).len(), 2, "principle {}", principle);
        }
    }

    #[test]
    fn test_ids_are_unique_and_prefixed() {
        let examples = default_examples();
        let ids: HashSet<&str> = examples.iter().map(|e| e.id()).collect();
        assert_eq!(ids.len(), examples.len());

        for example in &examples {
            let prefix = format!("{}.", example.principle());
            assert!(example.id().starts_with(&prefix), "bad id {}", example.id());
        }
    }

    #[test]
    fn test_only_insurance_is_random() {
        let random: Vec<&str> = default_examples()
            .iter()
            .filter(|e| !e.deterministic())
            .map(|e| e.id())
            .collect();
        assert_eq!(random, vec!["ocp.insurance"]);
    }
}

// Creational: Abstract Factory
// A producer hands out factories by name; each factory manufactures its own
// product. Client code sees only `Factory` and `Product`.
//
// Each factory here makes a single product type, so there are no product
// families to keep compatible.

use crate::demo::Demo;
use crate::error::PatternError;
use crate::registry::{identify, Entry, Named, Registry};

// ============================================================================
// Products
// ============================================================================

/// Anything a factory can hand back. Products only identify themselves.
pub trait Product: Named {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Concrete1;

impl Named for Concrete1 {
    fn type_name(&self) -> &'static str {
        "Concrete1"
    }
}

impl Product for Concrete1 {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Concrete2;

impl Named for Concrete2 {
    fn type_name(&self) -> &'static str {
        "Concrete2"
    }
}

impl Product for Concrete2 {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Concrete3;

impl Named for Concrete3 {
    fn type_name(&self) -> &'static str {
        "Concrete3"
    }
}

impl Product for Concrete3 {}

// ============================================================================
// Factories
// ============================================================================

pub trait Factory: Named {
    fn manufacture(&self) -> Box<dyn Product>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Factory1;

impl Named for Factory1 {
    fn type_name(&self) -> &'static str {
        "Factory1"
    }
}

impl Factory for Factory1 {
    fn manufacture(&self) -> Box<dyn Product> {
        Box::new(Concrete1)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Factory2;

impl Named for Factory2 {
    fn type_name(&self) -> &'static str {
        "Factory2"
    }
}

impl Factory for Factory2 {
    fn manufacture(&self) -> Box<dyn Product> {
        Box::new(Concrete2)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Factory3;

impl Named for Factory3 {
    fn type_name(&self) -> &'static str {
        "Factory3"
    }
}

impl Factory for Factory3 {
    fn manufacture(&self) -> Box<dyn Product> {
        Box::new(Concrete3)
    }
}

// ============================================================================
// Producer
// ============================================================================

static FACTORIES: Registry<dyn Factory> = Registry::new(
    "factory",
    &[
        Entry {
            key: "factory1",
            build: || Box::new(Factory1),
        },
        Entry {
            key: "factory2",
            build: || Box::new(Factory2),
        },
        Entry {
            key: "factory3",
            build: || Box::new(Factory3),
        },
    ],
);

#[derive(Debug)]
pub struct FactoryProducer;

impl FactoryProducer {
    pub const DEFAULT_KEY: &'static str = "factory1";

    pub fn produce(key: &str) -> Result<Box<dyn Factory>, PatternError> {
        FACTORIES.lookup(key)
    }

    pub fn registry() -> &'static Registry<dyn Factory> {
        &FACTORIES
    }
}

/// Produce a factory, manufacture a product from it, and identify the product.
pub fn run_demo(key: &str) -> Result<Vec<String>, PatternError> {
    let factory = FactoryProducer::produce(key)?;
    let product = factory.manufacture();

    Ok(vec![identify(&*product)])
}

pub const DEMO: Demo = Demo {
    title: "Abstract Factory Pattern",
    default_key: FactoryProducer::DEFAULT_KEY,
    keys: || FactoryProducer::registry().keys().collect(),
    run: run_demo,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_factory_product_pairs() {
        let cases = [
            ("factory1", "Factory1", "Concrete1"),
            ("factory2", "Factory2", "Concrete2"),
            ("factory3", "Factory3", "Concrete3"),
        ];
        for (key, factory_name, product_name) in cases {
            let factory = FactoryProducer::produce(key).unwrap();
            assert_eq!(factory.type_name(), factory_name);
            assert_eq!(factory.manufacture().type_name(), product_name);
        }
    }

    #[test]
    fn test_factory2_manufactures_concrete2() {
        let product = FactoryProducer::produce("factory2").unwrap().manufacture();
        assert_eq!(identify(&*product), "I am a Concrete2");
    }

    #[test]
    fn test_produce_is_case_insensitive() {
        let factory = FactoryProducer::produce("FaCtOrY3").unwrap();
        assert_eq!(factory.type_name(), "Factory3");
    }

    #[test]
    fn test_produce_unknown() {
        let err = FactoryProducer::produce("factory").err().unwrap();
        assert_eq!(
            err,
            PatternError::unknown_variant("factory", "factory", vec!["factory1", "factory2", "factory3"])
        );
    }

    #[test]
    fn test_factory_manufactures_fresh_products() {
        let factory = FactoryProducer::produce("factory1").unwrap();
        let first = factory.manufacture();
        let second = factory.manufacture();
        assert_eq!(identify(&*first), identify(&*second));
    }

    #[test]
    fn test_run_demo_default() {
        let lines = run_demo(FactoryProducer::DEFAULT_KEY).unwrap();
        assert_eq!(lines, vec!["I am a Concrete1"]);
    }

    #[test]
    fn test_run_demo_unknown() {
        let err = run_demo("concrete1").err().unwrap();
        assert!(err.to_string().contains("concrete1"));
    }

    proptest! {
        #[test]
        fn test_upper_and_lower_agree(n in 1u8..=3) {
            let lower = FactoryProducer::produce(&format!("factory{n}")).unwrap();
            let upper = FactoryProducer::produce(&format!("FACTORY{n}")).unwrap();
            prop_assert_eq!(lower.type_name(), upper.type_name());
            prop_assert_eq!(lower.manufacture().type_name(), format!("Concrete{n}"));
        }

        #[test]
        fn test_unrecognized_keys_fail(key in "[a-z0-9]{0,12}") {
            prop_assume!(!matches!(key.as_str(), "factory1" | "factory2" | "factory3"));
            prop_assert!(FactoryProducer::produce(&key).is_err());
        }
    }
}

// Creational: Factory Method
// One factory function builds products by name. Callers get a
// `Box<dyn Product>` and never see the concrete type.

use crate::demo::Demo;
use crate::error::PatternError;
use crate::registry::{identify, Entry, Named, Registry};

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

static PRODUCTS: Registry<dyn Product> = Registry::new(
    "concrete",
    &[
        Entry {
            key: "concrete1",
            build: || Box::new(Concrete1),
        },
        Entry {
            key: "concrete2",
            build: || Box::new(Concrete2),
        },
        Entry {
            key: "concrete3",
            build: || Box::new(Concrete3),
        },
    ],
);

#[derive(Debug)]
pub struct Factory;

impl Factory {
    pub const DEFAULT_KEY: &'static str = "concrete1";

    pub fn manufacture(key: &str) -> Result<Box<dyn Product>, PatternError> {
        PRODUCTS.lookup(key)
    }

    pub fn registry() -> &'static Registry<dyn Product> {
        &PRODUCTS
    }
}

pub fn run_demo(key: &str) -> Result<Vec<String>, PatternError> {
    let product = Factory::manufacture(key)?;
    Ok(vec![identify(&*product)])
}

pub const DEMO: Demo = Demo {
    title: "Factory Method Pattern",
    default_key: Factory::DEFAULT_KEY,
    keys: || Factory::registry().keys().collect(),
    run: run_demo,
};

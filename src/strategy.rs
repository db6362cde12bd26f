// Behavioral: Strategy selection
// Interchangeable algorithms behind one trait, chosen at runtime by name.
//
// The client only depends on `Strategy` and `StrategySelector`; it never
// names a concrete strategy type.

use crate::demo::Demo;
use crate::error::PatternError;
use crate::registry::{identify, Entry, Named, Registry};

// ============================================================================
// Capability
// ============================================================================

pub trait Strategy: Named {
    /// Runs the strategy and returns its report line.
    fn execute(&self) -> String;
}

// ============================================================================
// Concrete strategies
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteStrategy1;

impl Named for ConcreteStrategy1 {
    fn type_name(&self) -> &'static str {
        "ConcreteStrategy1"
    }
}

impl Strategy for ConcreteStrategy1 {
    fn execute(&self) -> String {
        "Executing strategy 1".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteStrategy2;

impl Named for ConcreteStrategy2 {
    fn type_name(&self) -> &'static str {
        "ConcreteStrategy2"
    }
}

impl Strategy for ConcreteStrategy2 {
    fn execute(&self) -> String {
        "Executing strategy 2".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteStrategy3;

impl Named for ConcreteStrategy3 {
    fn type_name(&self) -> &'static str {
        "ConcreteStrategy3"
    }
}

impl Strategy for ConcreteStrategy3 {
    fn execute(&self) -> String {
        "Executing strategy 3".to_string()
    }
}

// ============================================================================
// Selector
// ============================================================================

static STRATEGIES: Registry<dyn Strategy> = Registry::new(
    "strategy",
    &[
        Entry {
            key: "strategy1",
            build: || Box::new(ConcreteStrategy1),
        },
        Entry {
            key: "strategy2",
            build: || Box::new(ConcreteStrategy2),
        },
        Entry {
            key: "strategy3",
            build: || Box::new(ConcreteStrategy3),
        },
    ],
);

#[derive(Debug)]
pub struct StrategySelector;

impl StrategySelector {
    /// Key the narrated demo selects when none is given.
    pub const DEFAULT_KEY: &'static str = "strategy1";

    pub fn select(key: &str) -> Result<Box<dyn Strategy>, PatternError> {
        STRATEGIES.lookup(key)
    }

    pub fn registry() -> &'static Registry<dyn Strategy> {
        &STRATEGIES
    }
}

/// Select a strategy, identify it, then run it.
pub fn run_demo(key: &str) -> Result<Vec<String>, PatternError> {
    let strategy = StrategySelector::select(key)?;

    // Static type is `dyn Strategy`, but identify reports the concrete type
    Ok(vec![identify(&*strategy), strategy.execute()])
}

pub const DEMO: Demo = Demo {
    title: "Strategy Pattern",
    default_key: StrategySelector::DEFAULT_KEY,
    keys: || StrategySelector::registry().keys().collect(),
    run: run_demo,
};

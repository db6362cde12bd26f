//! # Design Patterns: Selection and Creation
//!
//! Runnable examples of three classic patterns, each built on the same
//! mechanism: a closed table of case-insensitive keys mapped to
//! constructors, returning a boxed trait object.
//!
//! ## Creational
//! - Factory Method ([`factory_method`]): `Factory::manufacture("concrete1")`
//! - Abstract Factory ([`abstract_factory`]): `FactoryProducer::produce("factory1")`
//!
//! ## Behavioral
//! - Strategy ([`strategy`]): `StrategySelector::select("strategy1")`
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_factory_method
//! cargo run --bin p2_abstract_factory -- FACTORY2
//! cargo run --bin p3_strategy -- --list
//! ```
//!
//! Set `RUST_LOG=debug` to see each registry lookup on stderr.

pub mod abstract_factory;
pub mod demo;
pub mod error;
pub mod factory_method;
pub mod registry;
pub mod strategy;

pub use error::PatternError;
pub use registry::{identify, Named, Registry};

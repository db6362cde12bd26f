// Pattern 2: Abstract Factory
// Main only depends on the producer and the factory/product traits.

use std::process::ExitCode;

use design_patterns::{abstract_factory, demo};

fn main() -> ExitCode {
    demo::run_main(&abstract_factory::DEMO)
}

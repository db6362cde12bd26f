// Pattern 1: Factory Method
// Main only depends on the product trait and the factory; it never names a
// concrete product.

use std::process::ExitCode;

use design_patterns::{demo, factory_method};

fn main() -> ExitCode {
    demo::run_main(&factory_method::DEMO)
}

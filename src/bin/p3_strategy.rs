// Pattern 3: Strategy
// Main only depends on the strategy trait and the selector.

use std::process::ExitCode;

use design_patterns::{demo, strategy};

fn main() -> ExitCode {
    demo::run_main(&strategy::DEMO)
}

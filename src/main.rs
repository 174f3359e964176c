use miette::Result;

/// Main entry point for the cycle-census CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    cycle_census::init_tracing();

    // Run the library's main function
    cycle_census::run()
}

//! go-include's main application entry point.
//! Parses arguments, captures the process environment and standard streams,
//! and hands them to the generator.

use std::collections::HashMap;

use go_include::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    generator::Generator,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Builds the configuration from arguments and environment
/// 2. Resolves patterns, encodes every source and renders the template
/// 3. Writes the result to standard output or the target file
fn run(args: Args) -> Result<()> {
    let env: HashMap<String, String> = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    let config = Config::new(args, &env);
    let engine = MiniJinjaRenderer::new();

    let summary = Generator::new(&engine, &config)
        .generate(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())?;

    log::info!(
        "Generated {} constant(s) into {}, {} skipped",
        summary.entries,
        summary.output,
        summary.skipped
    );
    Ok(())
}

//! pagegen's application entry point.
//! Parses arguments, resolves the component sets and drives generation.

use pagegen::{
    cli::{get_args, Args},
    config::{load_manifest, parse_manifest, resolve_sets},
    constants::CONFIG_FILES,
    error::{default_error_handler, Result},
    filter::ComponentFilter,
    logger::init_logger,
    processor::{ErrorPolicy, Processor, ProcessorOptions},
    prompt::{DialoguerPrompter, Prompter},
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
/// 1. Loads and validates the manifest, if any
/// 2. Resolves the selected component sets
/// 3. Generates every component
/// 4. Turns collected failures into a non-zero exit
fn run(args: Args) -> Result<()> {
    let manifest = load_manifest(&args.root, args.config.as_deref(), &CONFIG_FILES)?
        .map(|content| parse_manifest(&content))
        .transpose()?;
    let sets = resolve_sets(manifest, &args.set.kinds());

    let renderer = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();
    let filter = ComponentFilter::new(&args.only)?;
    let options = ProcessorOptions {
        policy: if args.fail_fast {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Continue
        },
        dry_run: args.dry_run,
    };

    let processor = Processor::new(
        &renderer,
        args.interactive.then_some(&prompter as &dyn Prompter),
        &filter,
        options,
    );

    processor.generate(&sets, &args.root)?.into_result()?;

    println!("All files created successfully.");
    Ok(())
}

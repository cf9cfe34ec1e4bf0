use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pixroute", version, about = "Trace color-coded paths through an image")]
struct Cli {
    /// Input image.
    #[arg(long = "in", default_value = pixroute::DEFAULT_INPUT)]
    in_path: PathBuf,

    /// Output image; the format follows the extension.
    #[arg(long, default_value = pixroute::DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Give up on a trace after this many steps.
    #[arg(long, default_value_t = pixroute::DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Drop traces that leave the image instead of failing the run.
    #[arg(long)]
    skip_out_of_bounds: bool,

    /// Trace start cells on a worker pool.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count (implies --parallel).
    #[arg(long)]
    threads: Option<usize>,

    /// Background color of the output, #RRGGBB or #RRGGBBAA.
    #[arg(long, value_parser = parse_color)]
    background: Option<pixroute::Rgba8>,

    /// Also write the traced paths as JSON.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_color(s: &str) -> Result<pixroute::Rgba8, String> {
    pixroute::Rgba8::from_hex(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = pixroute::PipelineConfig {
        trace: pixroute::TraceSettings {
            max_steps: cli.max_steps,
            on_out_of_bounds: if cli.skip_out_of_bounds {
                pixroute::OutOfBoundsPolicy::Skip
            } else {
                pixroute::OutOfBoundsPolicy::Abort
            },
            threading: pixroute::TraceThreading {
                parallel: cli.parallel || cli.threads.is_some(),
                threads: cli.threads,
            },
        },
        render: pixroute::RenderSettings {
            background: cli.background.unwrap_or(pixroute::Rgba8::TRANSPARENT),
            ..pixroute::RenderSettings::default()
        },
        input: cli.in_path,
        output: cli.out,
        report: cli.report,
    };

    let summary = pixroute::run(&config)?;

    eprintln!(
        "wrote {} ({} paths, {} pixels)",
        config.output.display(),
        summary.paths,
        summary.painted
    );
    if summary.skipped > 0 {
        eprintln!("skipped {} out-of-bounds traces", summary.skipped);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

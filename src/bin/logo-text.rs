use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use logo_text_crop::{process_file, ProcessResult, DEFAULT_OUTPUT_PATH};

#[derive(Parser)]
#[command(
    name = "logo-text",
    about = "Extract the text region of a logo into a cropped, transparent PNG",
    version,
    after_help = "The logo is assumed to be laid out as [shield][text]; the second\n\
                  band of coloured columns is kept. Grey and white pixels are removed."
)]
struct Cli {
    /// Input logo image
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Enable verbose output (segment details)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose && cli.quiet {
        eprintln!("Error: Cannot specify both --verbose and --quiet");
        process::exit(1);
    }

    init_logging(&cli);

    if !cli.input.exists() {
        eprintln!("Error: Input path does not exist: {}", cli.input.display());
        process::exit(1);
    }

    let result = process_file(&cli.input, &cli.output);
    print_result(&result, cli.quiet);

    if !result.success {
        process::exit(1);
    }
}

fn print_result(result: &ProcessResult, quiet: bool) {
    let filename = display_name(&result.path);

    if result.success {
        if quiet {
            return;
        }
        match result.dimensions {
            Some((w, h)) => eprintln!(
                "[OK] {filename} -> {} ({w}x{h})",
                result.output.display()
            ),
            None => eprintln!("[OK] {filename} -> {}", result.output.display()),
        }
    } else {
        eprintln!("[FAIL] {filename}: {}", result.message);
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}

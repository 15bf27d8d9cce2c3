use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use loshu_assets::{load_magic_square, quote};
use loshu_core::sum_product;

#[derive(Parser)]
#[command(name = "loshu", about = "Bundled magic-square lookup and vector sums")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bundled magic square of size n
    Square {
        /// Square size (3 and 4 are bundled)
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Emit the square as JSON instead of the padded grid
        #[arg(long)]
        json: bool,
    },

    /// Print a greeting
    Hello,

    /// Print the bundled Oscar Wilde quote
    Quote,

    /// Sum of elementwise products of two comma-separated vectors
    Dot {
        /// First vector, e.g. 1,2,3
        x: String,

        /// Second vector, same length
        y: String,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Square { n, json } => cmd_square(*n, *json),
        Commands::Hello => cmd_hello(),
        Commands::Quote => cmd_quote(),
        Commands::Dot { x, y } => cmd_dot(x, y),
    }
}

fn cmd_square(n: i64, json: bool) -> Result<()> {
    let Some(square) = load_magic_square(n) else {
        // Unsupported size is a normal branch: fixed message, exit 0
        println!("currently only n = 3 or 4 is supported");
        return Ok(());
    };

    if json {
        let out = serde_json::to_string(&square).context("failed to serialize square")?;
        println!("{out}");
    } else {
        println!("{square}");
    }
    Ok(())
}

fn cmd_hello() -> Result<()> {
    println!("Hello!");
    Ok(())
}

fn cmd_quote() -> Result<()> {
    println!("{}", quote());
    Ok(())
}

fn cmd_dot(x: &str, y: &str) -> Result<()> {
    let x = parse_vector(x).context("failed to parse x")?;
    let y = parse_vector(y).context("failed to parse y")?;

    let result = sum_product(&x, &y)?;
    println!("{result}");
    Ok(())
}

/// Parse a comma-separated list of numbers; empty entries are skipped so
/// trailing commas are harmless.
fn parse_vector(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("'{t}' is not a number"))
        })
        .collect()
}

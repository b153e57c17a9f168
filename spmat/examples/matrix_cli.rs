//! Build a sparse matrix from command-line cells, then render it or count
//! cells against a threshold
//!
//! ```text
//! cargo run --example matrix_cli -- render 2:3=5 2:5=7 4:1=9
//! cargo run --example matrix_cli -- count --equals 0 2:3=5 2:5=7 4:1=9
//! RUST_LOG=trace cargo run --example matrix_cli -- render --max-index 3 4:1=9
//! ```

use clap::{Args, Parser, Subcommand};
use spmat::{
    count_matching, count_matching_dense, MatrixConfig, RenderConfig, SparseMatrix,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "spmat CLI - build a default-valued sparse matrix and inspect it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MatrixArgs {
    /// Cells in the form row:column=value
    #[arg(required = true)]
    cells: Vec<String>,

    /// Value of every unassigned cell
    #[arg(long, default_value_t = 0)]
    default: i64,

    /// Reject cells with a row or column above this index
    #[arg(long)]
    max_index: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dense grid
    Render {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Cell separator
        #[arg(long, default_value = "\t")]
        separator: String,
    },
    /// Count cells equal to a value
    Count {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Value to count
        #[arg(long)]
        equals: i64,

        /// Count over the full dense grid instead of rows * columns
        #[arg(long)]
        dense: bool,
    },
}

/// Parse "row:column=value"
fn parse_cell(text: &str) -> Result<(usize, usize, i64), String> {
    let (coordinate, value) = text
        .split_once('=')
        .ok_or_else(|| format!("missing '=' in {text:?}"))?;
    let (row, column) = coordinate
        .split_once(':')
        .ok_or_else(|| format!("missing ':' in {text:?}"))?;

    let row = row.trim().parse().map_err(|e| format!("bad row in {text:?}: {e}"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|e| format!("bad column in {text:?}: {e}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("bad value in {text:?}: {e}"))?;
    Ok((row, column, value))
}

fn build(args: &MatrixArgs) -> Result<SparseMatrix<i64>, Box<dyn std::error::Error>> {
    let config = match args.max_index {
        Some(max_index) => MatrixConfig::with_max_index(max_index),
        None => MatrixConfig::default(),
    };
    let mut matrix = SparseMatrix::with_config(args.default, config)?;
    for text in &args.cells {
        let (row, column, value) = parse_cell(text)?;
        matrix.add(row, column, value)?;
    }
    Ok(matrix)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Render { matrix, separator } => {
            let matrix = build(matrix)?;
            let config = RenderConfig::default().with_separator(separator.as_str());
            matrix.render_to(&mut std::io::stdout().lock(), &config)?;
        }
        Commands::Count {
            matrix,
            equals,
            dense,
        } => {
            let matrix = build(matrix)?;
            let count = if *dense {
                count_matching_dense(&matrix, |v| v == equals)
            } else {
                count_matching(&matrix, |v| v == equals)
            };
            println!(
                "{count} cell(s) equal {equals} (extent {}x{}, {} stored)",
                matrix.rows(),
                matrix.columns(),
                matrix.size()
            );
        }
    }

    Ok(())
}

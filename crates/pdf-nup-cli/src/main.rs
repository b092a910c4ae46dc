use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

const EXAMPLES: &str = "\
Examples:
  pdf-nup input.pdf -n 4              Combine 4 pages into 1 (default)
  pdf-nup input.pdf -n 2              Combine 2 pages into 1
  pdf-nup input.pdf -n 9              Combine 9 pages into 1
  pdf-nup input.pdf -o output.pdf     Specify output file
  pdf-nup input.pdf -n 4 --landscape  Use landscape orientation";

#[derive(Parser)]
#[command(
    name = "pdf-nup",
    about = "Combine multiple PDF pages into a single page (n-up)",
    version,
    after_help = EXAMPLES
)]
struct Cli {
    /// Input PDF file
    input: PathBuf,

    /// Number of pages to combine into one [default: 4]
    #[arg(short = 'n', long, value_name = "N")]
    pages_per_sheet: Option<usize>,

    /// Output PDF file [default: <input>_nup.pdf]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use landscape orientation for output pages
    #[arg(long)]
    landscape: bool,

    /// Output paper size [default: letter]
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// JSON options file; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Show detailed progress information
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl From<PaperArg> for pdf_nup::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_nup.pdf"))
}

async fn build_options(cli: &Cli) -> Result<pdf_nup::NupOptions> {
    let mut options = match &cli.config {
        Some(path) => pdf_nup::NupOptions::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => pdf_nup::NupOptions::default(),
    };

    if let Some(n) = cli.pages_per_sheet {
        options.pages_per_sheet = n;
    }
    if cli.landscape {
        options.orientation = pdf_nup::Orientation::Landscape;
    }
    if let Some(paper) = cli.paper {
        options.paper_size = paper.into();
    }

    options.validate()?;
    Ok(options)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    ensure!(
        cli.input.exists(),
        "Input file not found: {}",
        cli.input.display()
    );

    let options = build_options(&cli).await?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    log::info!("Input: {}", cli.input.display());
    log::info!("Output: {}", output.display());
    log::info!("Pages per sheet: {}", options.pages_per_sheet);
    log::info!(
        "Orientation: {}",
        if options.orientation.is_landscape() {
            "landscape"
        } else {
            "portrait"
        }
    );

    let document = pdf_nup::load_pdf(&cli.input)
        .await
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    if cli.stats_only {
        let stats = pdf_nup::calculate_statistics(&document, &options)?;
        println!("N-up Statistics:");
        println!("  Source pages: {}", stats.source_pages);
        println!("  Grid: {} x {}", stats.grid.cols, stats.grid.rows);
        println!("  Output sheets: {}", stats.output_sheets);
        println!("  Blank cells: {}", stats.blank_cells);
        return Ok(());
    }

    let composed = pdf_nup::nup(&document, &options).await?;
    pdf_nup::save_pdf(composed, &output)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Created: {}", output.display());

    Ok(())
}

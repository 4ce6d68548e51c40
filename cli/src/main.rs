//! fogodoc CLI - purchase-order document generation

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "fogodoc")]
#[command(author = "fogo")]
#[command(version)]
#[command(about = "Render purchase-order PDFs and supplier messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an order JSON file to a single-page PDF
    Pdf {
        /// Input order JSON file
        #[arg(value_name = "ORDER")]
        input: PathBuf,

        /// Output file (defaults to the input name with .pdf)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the supplier message for an order
    #[command(alias = "msg")]
    Message {
        /// Input order JSON file
        #[arg(value_name = "ORDER")]
        input: PathBuf,

        /// Public URL of the rendered PDF, included in the message
        #[arg(long, value_name = "URL", env = "FOGODOC_PDF_URL")]
        pdf_url: String,
    },

    /// Render an ad-hoc titled document to a single-page PDF
    Text {
        /// Document title
        #[arg(long, value_name = "TITLE")]
        title: String,

        /// Body line, repeatable and kept in order
        #[arg(long = "line", value_name = "LINE")]
        lines: Vec<String>,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = "document.pdf")]
        output: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pdf { input, output } => cmd_pdf(&input, output.as_deref()),
        Commands::Message { input, pdf_url } => cmd_message(&input, &pdf_url),
        Commands::Text {
            title,
            lines,
            output,
        } => cmd_text(&title, &lines, &output),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_pdf(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let order = fogodoc::load_order(input)?;
    log::debug!("rendering order {} ({} lines)", order.id, order.lines.len());
    let bytes = fogodoc::order_pdf(&order);

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("pdf"));
    fs::write(&path, &bytes)?;

    println!(
        "{} {} ({} bytes)",
        "Saved to".green(),
        path.display(),
        bytes.len()
    );
    Ok(())
}

fn cmd_message(input: &Path, pdf_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let order = fogodoc::load_order(input)?;
    println!("{}", fogodoc::order_message(&order, pdf_url));
    Ok(())
}

fn cmd_text(
    title: &str,
    lines: &[String],
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fogodoc::render_pdf(title, lines);
    fs::write(output, &bytes)?;

    println!(
        "{} {} ({} bytes)",
        "Saved to".green(),
        output.display(),
        bytes.len()
    );
    Ok(())
}

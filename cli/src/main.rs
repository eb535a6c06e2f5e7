//! lexpdf CLI - extract content-bearing vocabulary from a PDF.
//!
//! The binary plays the collaborator role around the library pipeline:
//! it feeds the file in, reports how the document was classified, warns
//! when no content words were found, and writes the JSON artifact.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use lexpdf::{JsonFormat, Pipeline, PipelineOutput, ARTIFACT_FILE_NAME};

#[derive(Parser)]
#[command(name = "lexpdf")]
#[command(version)]
#[command(about = "Extract content words from digital and scanned PDFs", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output JSON file (default: filtered_words.json next to the input)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Print the page/paragraph word tree to stdout
    #[arg(long)]
    print: bool,

    /// Rasterization resolution for scanned documents
    #[arg(long, default_value = "300")]
    dpi: u32,

    /// OCR language (tesseract language code)
    #[arg(long, default_value = "eng")]
    lang: String,

    /// Disable parallel OCR and filtering
    #[arg(long)]
    sequential: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !lexpdf::detect::is_pdf(&cli.input) {
        return Err(format!("{} is not a PDF file", cli.input.display()).into());
    }

    let mut pipeline = Pipeline::new()
        .with_dpi(cli.dpi)
        .with_ocr_language(cli.lang.clone());
    if cli.sequential {
        pipeline = pipeline.sequential();
    }

    log::info!("processing {}", cli.input.display());
    let output = pipeline.run_file(&cli.input)?;

    println!(
        "{} {} PDF, {} pages, {} words",
        "Processed as a".green(),
        output.source.to_string().to_uppercase().green().bold(),
        output.layout.page_count(),
        output.tree.word_count()
    );

    if output.is_empty() {
        println!("{}", "No valid words found in this PDF.".yellow());
    }

    if cli.print {
        print_tree(&output);
    }

    let format = if cli.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = output.to_json(format)?;

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(ARTIFACT_FILE_NAME));
    fs::write(&path, json)?;
    println!("{} {}", "Wrote".green(), path.display());

    Ok(())
}

fn print_tree(output: &PipelineOutput) {
    for page in output.tree.pages() {
        println!("{}", format!("Page {}", page.number).bold());
        for paragraph in &page.paragraphs {
            println!("  Paragraph {}", paragraph.number);
            println!("    {}", paragraph.words.join(", "));
        }
    }
}

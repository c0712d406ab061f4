use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use docbrief::core::model::Lang;
use docbrief::core::summarize::SummaryConfig;
use docbrief::pipeline::{analyze_document, export_analysis, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "docbrief")]
#[command(version, about = "PDF summarization and table-of-contents candidate extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a PDF and list its heading candidates
    Analyze {
        /// Input PDF file path
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "outputs")]
        output: PathBuf,

        /// Fraction of the document's sentences to keep in the summary
        #[arg(long, default_value_t = 0.2)]
        ratio: f64,

        /// Hard cap on summary sentences
        #[arg(long, default_value_t = 12)]
        max_sentences: usize,

        /// Generate only the summary
        #[arg(long, conflicts_with = "toc_only")]
        summary_only: bool,

        /// Generate only the table of contents
        #[arg(long)]
        toc_only: bool,

        /// Document language for section-name detection
        #[arg(long, value_enum, default_value_t = LangArg::Ko)]
        lang: LangArg,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Analyze multiple PDF files
    Batch {
        /// Input PDF files
        inputs: Vec<PathBuf>,

        /// Output directory for all results
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fraction of the document's sentences to keep in the summary
        #[arg(long, default_value_t = 0.2)]
        ratio: f64,

        /// Hard cap on summary sentences
        #[arg(long, default_value_t = 12)]
        max_sentences: usize,

        /// Document language for section-name detection
        #[arg(long, value_enum, default_value_t = LangArg::Ko)]
        lang: LangArg,
    },

    /// Show information about a PDF file
    Info {
        /// Input PDF file path
        input: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum LangArg {
    Ko,
    En,
}

impl From<LangArg> for Lang {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::Ko => Lang::Ko,
            LangArg::En => Lang::En,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            ratio,
            max_sentences,
            summary_only,
            toc_only,
            lang,
            quiet,
        } => {
            let summary = SummaryConfig {
                ratio,
                max_sentences,
            };
            analyze_single(input, output, summary, lang.into(), summary_only, toc_only, quiet)
        }
        Commands::Batch {
            inputs,
            output,
            ratio,
            max_sentences,
            lang,
        } => {
            let summary = SummaryConfig {
                ratio,
                max_sentences,
            };
            analyze_batch(inputs, output, summary, lang.into())
        }
        Commands::Info { input } => show_info(input),
    }
}

fn analyze_single(
    input: PathBuf,
    output: PathBuf,
    summary: SummaryConfig,
    lang: Lang,
    summary_only: bool,
    toc_only: bool,
    quiet: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        anyhow::bail!("Input is not a file: {}", input.display());
    }

    if !quiet {
        println!("[*] Processing: {}", input.display());
        println!("[*] Output: {}", output.display());
    }

    let mut config = PipelineConfig::new(input.clone(), output.clone());
    config.summary = summary;
    config.lang = lang;
    config.with_summary = !toc_only;
    config.with_toc = !summary_only;

    if !quiet {
        println!("\n[+] Analyzing document...");
    }

    let report = analyze_document(&config)
        .with_context(|| format!("Failed to process PDF: {}", input.display()))?;

    if !quiet {
        println!("[+] Exporting results...");
    }

    export_analysis(&report, &config.output)
        .with_context(|| format!("Failed to export to: {}", output.display()))?;

    if !quiet {
        println!(
            "\n[✓] Done! {} sentences, {} heading candidates. Results saved to: {}",
            report.stats.sentences,
            report.stats.headings,
            output.display()
        );
    }

    Ok(())
}

fn analyze_batch(
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    summary: SummaryConfig,
    lang: Lang,
) -> Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("No input files specified");
    }

    let base_output = output.unwrap_or_else(|| PathBuf::from("batch_output"));

    println!("[*] Batch processing {} file(s)", inputs.len());
    println!("[*] Base output: {}\n", base_output.display());

    let mut success = 0;
    let mut failed = 0;

    for (i, input) in inputs.iter().enumerate() {
        println!("[{}/{}] Processing: {}", i + 1, inputs.len(), input.display());

        if !input.exists() {
            eprintln!("  [!] Skipped: file does not exist");
            failed += 1;
            continue;
        }

        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("input_{}", i + 1));
        let output_dir = base_output.join(stem);

        match analyze_single(input.clone(), output_dir, summary, lang, false, false, true) {
            Ok(_) => {
                println!("  [✓] Success");
                success += 1;
            }
            Err(e) => {
                eprintln!("  [✗] Failed: {e}");
                failed += 1;
            }
        }
        println!();
    }

    println!("\n[*] Summary: {success} succeeded, {failed} failed");

    if failed > 0 {
        anyhow::bail!("{} file(s) failed to process", failed);
    }

    Ok(())
}

fn show_info(input: PathBuf) -> Result<()> {
    use docbrief::core::headings::HeadingDetector;
    use docbrief::core::segment::SentenceSegmenter;
    use docbrief::extract::normalize::clean_extracted_text;
    use docbrief::extract::{PdfTextExtractor, TextExtractor};

    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let raw = PdfTextExtractor::new()
        .extract(&input)
        .with_context(|| format!("Failed to open PDF: {}", input.display()))?;
    let text = clean_extracted_text(&raw);

    let lines: Vec<&str> = text.lines().collect();
    let sentences = SentenceSegmenter::new().segment(&text);
    let headings = HeadingDetector::default().detect(&lines);

    println!("PDF Information");
    println!("===============");
    println!("File: {}", input.display());
    println!("Characters: {}", text.chars().count());
    println!("Lines: {}", lines.len());
    println!("Sentences: {}", sentences.len());
    println!("Heading candidates: {}", headings.len());

    Ok(())
}

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdf_catalog::{CatalogOptions, ExtractedImages, PaperSize};
use std::path::{Path, PathBuf};

mod logger;

#[derive(Parser)]
#[command(name = "pdfc", about = "Branded catalog PDF builder", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a catalog PDF from a ZIP of images
    Build {
        #[command(flatten)]
        archive: ArchiveArgs,

        /// Brand logo (PNG/JPG)
        #[arg(short, long)]
        logo: Option<PathBuf>,

        /// JSON file with title, subtitle, footer and paper size
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Catalog title
        #[arg(long)]
        title: Option<String>,

        /// Subtitle
        #[arg(long)]
        subtitle: Option<String>,

        /// Footer contact line
        #[arg(long)]
        footer: Option<String>,

        /// Output paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Date printed on the cover (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output PDF file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show what a ZIP contributes without generating anything
    Inspect {
        #[command(flatten)]
        archive: ArchiveArgs,
    },

    /// Write the default options to a JSON file
    InitConfig {
        /// Where to write the config
        path: PathBuf,
    },
}

#[derive(Args)]
struct ArchiveArgs {
    /// ZIP of extracted images
    #[arg(short, long)]
    archive: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Letter,
    Legal,
    A4,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::A4 => Self::A4,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose)
        .init()
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Build {
            archive,
            logo,
            config,
            title,
            subtitle,
            footer,
            paper,
            date,
            output,
        } => {
            let mut options = match &config {
                Some(path) => CatalogOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => CatalogOptions::default(),
            };
            if let Some(title) = title {
                options.title = title;
            }
            if let Some(subtitle) = subtitle {
                options.subtitle = subtitle;
            }
            if let Some(footer) = footer {
                options.footer = footer;
            }
            if let Some(paper) = paper {
                options.paper_size = paper.into();
            }
            let output = output.unwrap_or_else(|| PathBuf::from(&options.output_file_name));

            let extracted = load_archive(&archive.archive).await?;
            report_loaded(&extracted);

            let logo = match &logo {
                Some(path) => Some(
                    pdf_catalog::load_logo(path)
                        .await
                        .with_context(|| format!("Failed to load logo {}", path.display()))?,
                ),
                None => None,
            };

            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let request = options.into_request(logo, extracted.entries, date);
            let document = pdf_catalog::generate_catalog(request, &output)
                .await
                .context("Failed to generate catalog")?;

            println!(
                "Generated {} page(s) → {}",
                document.page_count,
                output.display()
            );
        }

        Commands::Inspect { archive } => {
            let extracted = load_archive(&archive.archive).await?;
            report_loaded(&extracted);

            for line in entry_listing(&extracted) {
                println!("{}", line);
            }
        }

        Commands::InitConfig { path } => {
            CatalogOptions::default()
                .save(&path)
                .await
                .with_context(|| format!("Failed to write config {}", path.display()))?;
            println!("Wrote default options → {}", path.display());
        }
    }

    Ok(())
}

async fn load_archive(path: &Path) -> Result<ExtractedImages> {
    pdf_catalog::load_archive(path)
        .await
        .with_context(|| format!("Failed to read images from {}", path.display()))
}

/// One line per decoded entry; the first also shows its pixel size
fn entry_listing(extracted: &ExtractedImages) -> Vec<String> {
    extracted
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if index == 0 {
                format!(
                    "  First: {} ({}x{})",
                    entry.name,
                    entry.image.width(),
                    entry.image.height()
                )
            } else {
                format!("  {}", entry.name)
            }
        })
        .collect()
}

fn report_loaded(extracted: &ExtractedImages) {
    println!("Loaded {} image(s) from ZIP.", extracted.len());
    if !extracted.skipped.is_empty() {
        println!("Skipped {} undecodable image(s):", extracted.skipped_count());
        for skipped in &extracted.skipped {
            println!("  {}: {}", skipped.name, skipped.reason);
        }
    }
}

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use pdf_booklet::{BookletOptions, BookletPlan, SignatureSpec};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(name = "pdfb", about = "Booklet imposition planner", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sheet order for printing and folding a booklet
    Plan {
        #[command(flatten)]
        source: SourceArgs,

        /// Signature size ("16") or range ("20-60", "-32", "8-")
        #[arg(short, long)]
        signature: Option<SignatureSpec>,

        /// Move the last page onto the back cover
        #[arg(long)]
        cover: bool,

        /// Options file (JSON); flags given on the command line win
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the signature size chosen for a page count
    Resolve {
        #[command(flatten)]
        source: SourceArgs,

        /// Signature size ("16") or range ("20-60", "-32", "8-")
        #[arg(short, long)]
        signature: Option<SignatureSpec>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Number of pages in the document
    #[arg(short, long)]
    pages: Option<usize>,

    /// PDF to count pages from
    #[arg(short, long)]
    input: Option<PathBuf>,
}

impl SourceArgs {
    fn apply(self, options: &mut BookletOptions) {
        if self.pages.is_some() {
            options.page_count = self.pages;
        }
        if self.input.is_some() {
            options.input_file = self.input;
        }
    }
}

async fn page_count(options: &BookletOptions) -> Result<usize> {
    options.validate()?;
    match (options.page_count, &options.input_file) {
        (Some(pages), _) => Ok(pages),
        (None, Some(path)) => pdf_booklet::read_page_count(path)
            .await
            .with_context(|| format!("Failed to count pages in {}", path.display())),
        (None, None) => bail!("No input file or page count specified"),
    }
}

fn print_plan(plan: &BookletPlan) {
    let stats = pdf_booklet::calculate_statistics(plan);
    println!("Imposition Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Signature: {} pages", stats.signature);
    println!("  Signatures: {}", stats.signatures);
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Sheet sides: {}", stats.output_sides);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    if plan.cover {
        println!("  Cover applied: {}", stats.cover_applied);
    }

    println!();
    for (i, sheet) in plan.sequence.sheets().enumerate() {
        let sides: Vec<String> = sheet.iter().map(ToString::to_string).collect();
        println!("  Sheet {:>3}: {}", i + 1, sides.join("  "));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Plan {
            source,
            signature,
            cover,
            config,
            json,
        } => {
            let mut options = match config {
                Some(path) => BookletOptions::load(&path)
                    .await
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => BookletOptions::default(),
            };
            source.apply(&mut options);
            if let Some(signature) = signature {
                options.signature = signature;
            }
            options.cover |= cover;

            let pages = page_count(&options).await?;
            log::info!("planning {pages} pages with signature {:?}", options.signature);
            let plan = pdf_booklet::plan(pages, &options.signature, options.cover)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
            }
        }

        Commands::Resolve { source, signature } => {
            let mut options = BookletOptions {
                signature: signature.unwrap_or_default(),
                ..Default::default()
            };
            source.apply(&mut options);

            let pages = page_count(&options).await?;
            let resolution = pdf_booklet::resolve(pages, &options.signature)?;
            println!("Signature: {}", resolution.signature);
            println!("Blank padding: {}", resolution.blank_padding);
        }
    }

    Ok(())
}

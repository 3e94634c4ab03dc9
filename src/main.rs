use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use depsieve::ingest::ingest_with_policy;
use depsieve::specifier::DistTagPolicy;

/// Demo manifest, for trying the pipeline without a package.json at hand.
const DEMO_MANIFEST: &str = include_str!("../assets/demo-package.json");

#[derive(Parser)]
#[command(name = "depsieve")]
#[command(version = "0.1.0")]
#[command(about = "Package manifest ingestion with registry-resolvable dependency extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a package.json and print the extraction result as JSON
    Ingest {
        /// Path to the manifest (reads stdin when omitted)
        path: Option<PathBuf>,

        /// Use the bundled demo manifest instead of a file or stdin
        #[arg(long)]
        demo: bool,

        /// How dist-tag specifiers like "latest" classify
        #[arg(long, default_value_t = DistTagPolicy::Strict)]
        dist_tags: DistTagPolicy,
    },
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ingest {
            path,
            demo,
            dist_tags,
        }) => {
            let raw = read_input(path.as_deref(), demo)?;
            let result = ingest_with_policy(&raw, dist_tags);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Some(Commands::Version) => {
            println!("depsieve v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("Depsieve - Package Manifest Ingestion");
            println!("Run 'depsieve ingest' to extract dependencies from stdin");
            println!("Run 'depsieve --help' for more information");
        }
    }

    Ok(())
}

/// Reads the raw manifest text from the demo asset, a file, or stdin.
fn read_input(path: Option<&std::path::Path>, demo: bool) -> anyhow::Result<String> {
    if demo {
        return Ok(DEMO_MANIFEST.to_string());
    }
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read manifest from stdin")?;
            Ok(buffer)
        }
    }
}

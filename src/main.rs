use clap::{Parser, Subcommand};
use sitewire::{collections, config, copy, output, transform, types};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sitewire")]
#[command(about = "Build wiring for a personal blog site")]
#[command(long_about = "\
Build wiring for a personal blog site

The templating framework renders pages; sitewire supplies its inputs and
fixes up its outputs. The handoff is a JSON items manifest: the framework
writes one describing every parsed document, sitewire derives the named
collections from it, copies passthrough assets into the output tree, and
rewrites blog image references after rendering.

Site structure:

  ./
  ├── config.toml                  # Build wiring (optional, defaults shown by gen-config)
  ├── styles.css                   # Passthrough copy → _site/styles.css
  ├── _includes/                   # Layouts (base.njk is the default layout)
  ├── blog/
  │   ├── attachments/             # Passthrough copy, referenced by posts
  │   ├── embeds/                  # Passthrough copy
  │   └── *.md                     # Posts (tag: post), rendered by the framework
  ├── favorites/                   # Favorites section (collection by url prefix)
  └── _site/                       # Rendered output, transformed in place

Derived collections (newest first):
  status:     items tagged 'status'
  favorites:  items under /favorites/, excluding the section index
  posts:      items tagged 'post'

Run 'sitewire gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Input root (where config.toml lives)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Directory for manifest handoff files
    #[arg(long, default_value = ".sitewire-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive status/favorites/posts collections from the items manifest
    Collections,
    /// Copy passthrough files and directories into the output tree
    Copy,
    /// Rewrite blog image references across the rendered output
    Transform,
    /// Run every step: copy → collections → transform
    Build,
    /// Validate config and items manifest without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Collections => {
            let manifest = read_items_manifest(&cli.temp_dir)?;
            run_collections(&manifest, &cli.temp_dir)?;
        }
        Command::Copy => {
            let config = config::load_config(&cli.source)?;
            let output_dir = cli.source.join(&config.dirs.output);
            let copied = copy::run_passthrough_copies(
                &cli.source,
                &output_dir,
                &config.passthrough_copy,
            )?;
            output::print_copy_output(&copied);
        }
        Command::Transform => {
            let config = config::load_config(&cli.source)?;
            let output_dir = cli.source.join(&config.dirs.output);
            let pages = transform::rewrite_output_dir(&output_dir)?;
            output::print_transform_output(&pages);
        }
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            let output_dir = cli.source.join(&config.dirs.output);

            println!("==> Copying passthrough assets");
            let copied = copy::run_passthrough_copies(
                &cli.source,
                &output_dir,
                &config.passthrough_copy,
            )?;
            output::print_copy_output(&copied);

            println!("==> Deriving collections");
            let manifest = read_items_manifest(&cli.temp_dir)?;
            run_collections(&manifest, &cli.temp_dir)?;

            println!("==> Rewriting blog image references");
            let pages = transform::rewrite_output_dir(&output_dir)?;
            output::print_transform_output(&pages);

            println!("==> Done: {}", output_dir.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            println!("Config OK ({} passthrough targets)", config.passthrough_copy.len());
            let items_path = cli.temp_dir.join("items.json");
            if items_path.exists() {
                let manifest = read_items_manifest(&cli.temp_dir)?;
                let query = collections::ItemQuery::new(&manifest.items);
                let set = collections::build_collections(&query);
                output::print_collections_output(&set);
            } else {
                println!("No items manifest at {} (skipped)", items_path.display());
            }
            println!("==> Wiring is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Read the framework-written items manifest from the temp directory.
fn read_items_manifest(temp_dir: &Path) -> Result<types::ItemsManifest, Box<dyn std::error::Error>> {
    let items_path = temp_dir.join("items.json");
    let content = std::fs::read_to_string(&items_path)
        .map_err(|e| format!("reading {}: {e}", items_path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

/// Derive collections, write `collections.json`, print the summary.
fn run_collections(
    manifest: &types::ItemsManifest,
    temp_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = collections::ItemQuery::new(&manifest.items);
    let set = collections::build_collections(&query);
    std::fs::create_dir_all(temp_dir)?;
    let out_path = temp_dir.join("collections.json");
    let json = serde_json::to_string_pretty(&set)?;
    std::fs::write(&out_path, json)?;
    output::print_collections_output(&set);
    Ok(())
}

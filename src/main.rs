use clap::{Parser, Subcommand};
use flatsite::index::{IndexManager, SiteLayout};
use flatsite::{build, config, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flatsite")]
#[command(about = "Indexer for flat-file content sites")]
#[command(long_about = "\
Indexer for flat-file content sites

Your directory tree is the database. Categories, pages and posts live as
JSON files under a conventional layout; the indexer derives slugs, dates,
tags and menu membership from names alone and caches the result.

Content structure:

  site/
  ├── config.toml                     # Site config (optional)
  ├── common/
  │   ├── categories/harvesting.json  # Category (slug = file stem)
  │   ├── pages/index.json            # Root page (slug = /)
  │   ├── pages/apiaries/index.json   # Section page (slug = apiaries)
  │   └── landing/{tags,category,blog}/index.json
  ├── user-data/@user/posts/<category>/<type>/
  │   └── 20210101083000_tagone,tagtwo_harvest-time.json
  └── cache/indexes/*.inx             # Written by the indexer

Post filenames encode date, tags and title positionally; the canonical
post slug is {year}/{month}/{title}.")]
#[command(version)]
struct Cli {
    /// Site root directory
    #[arg(long, default_value = "site", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the indexes (or load them when a cache is present)
    Build,
    /// Force a full rebuild, overwriting any cached indexes
    Reindex,
    /// Validate the content tree without writing anything
    Check,
    /// Look up one element by slug
    Lookup { slug: String },
    /// List a pagination page of post slugs
    Posts {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let site_config = config::load_config(&cli.root)?;

    match cli.command {
        Command::Build => {
            let manager = IndexManager::new(&cli.root)?;
            println!("==> {}", site_config.site.name);
            for line in output::format_summary(&manager) {
                println!("{line}");
            }
        }
        Command::Reindex => {
            let mut manager = IndexManager::new(&cli.root)?;
            manager.reindex()?;
            println!("==> Reindexed {}", cli.root.display());
            for line in output::format_summary(&manager) {
                println!("{line}");
            }
        }
        Command::Check => {
            let layout = SiteLayout::new(&cli.root)?;
            let built = build::build_all(&layout)?;
            println!(
                "==> Content is valid: {} categories, {} pages, {} posts, {} tags",
                built.categories.len(),
                built.pages.len(),
                built.posts.len(),
                built.tags.len()
            );
        }
        Command::Lookup { slug } => {
            let manager = IndexManager::new(&cli.root)?;
            if !manager.element_exists(&slug) {
                println!("not found: {slug}");
                std::process::exit(1);
            }
            for line in output::format_element(manager.element(&slug)?) {
                println!("{line}");
            }
        }
        Command::Posts { page } => {
            let manager = IndexManager::new(&cli.root)?;
            let per_page = site_config.content.posts_per_page;
            let posts: Vec<_> = manager
                .posts_index()
                .values()
                .skip(page.saturating_sub(1) * per_page)
                .take(per_page)
                .collect();
            for post in posts {
                println!("{}  {}", post.date, post.key);
            }
        }
    }

    Ok(())
}

// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};

use crate::config::consts::{DATA_DIR, DEFAULT_DATA_FILE, DEFAULT_OUT_DIR, DEFAULT_SOURCE_FILE};
use crate::config::options::{ExportOptions, ImportOptions};
use crate::data::{CategoryFilter, Criteria, DirectoryView, SortOrder, Catalog};
use crate::model::category_label;
use crate::progress::Progress;
use crate::{admin::AdminSession, file, import, store};

#[derive(Debug, Parser)]
#[command(name = "pleasure_map", version, about = "Pleasure Island business directory tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert the spreadsheet export into the canonical JSON data file
    Import(ImportArgs),
    /// Print the directory as filtered by the given criteria
    List(ListArgs),
    /// Print the category metadata
    Categories {
        #[arg(long)]
        categories: Option<PathBuf>,
    },
    /// Write a dated copy of a data file (businesses-YYYY-MM-DD.json)
    Export {
        #[arg(long, default_value_os_t = default_data_path())]
        data: PathBuf,
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[arg(short, long, default_value_os_t = PathBuf::from(DATA_DIR).join(DEFAULT_SOURCE_FILE))]
    pub input: PathBuf,
    /// Output file, or a directory (trailing separator) to place businesses.json in
    #[arg(short, long, default_value = "")]
    pub output: String,
    /// Text appended to every address
    #[arg(long)]
    pub suffix: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value_os_t = default_data_path())]
    pub data: PathBuf,
    #[arg(long)]
    pub categories: Option<PathBuf>,
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// "all" or a category id
    #[arg(short, long, default_value = "all", value_parser = CategoryFilter::parse)]
    pub category: CategoryFilter,
    #[arg(long)]
    pub chamber_only: bool,
    /// Chamber members first, then everyone else
    #[arg(long)]
    pub members_first: bool,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(DEFAULT_DATA_FILE)
}

/// Prints a running line per 25 rows and a final tally.
struct CliProgress {
    total: usize,
    kept: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, row: usize, accepted: bool) {
        if accepted { self.kept += 1; }
        if row % 25 == 0 { eprintln!("  {}/{} rows", row, self.total); }
    }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
}

pub fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Import(args) => run_import(args),
        Command::List(args) => run_list(args),
        Command::Categories { categories } => {
            for c in store::load_categories(categories.as_deref())? {
                println!("{}\t{}\t{}\t{}", c.id, c.icon, c.color, c.name);
            }
            Ok(())
        }
        Command::Export { data, dir } => {
            let shops = store::load_records(&data)?;
            let path = AdminSession::new(shops).export(&ExportOptions::with_dir(dir))?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn run_import(args: ImportArgs) -> color_eyre::Result<()> {
    let mut opts = ImportOptions {
        input: args.input,
        ..ImportOptions::default()
    };
    if !args.output.trim().is_empty() {
        opts.output = file::resolve_single_out_path(&args.output, DEFAULT_DATA_FILE)?;
    }
    if let Some(suffix) = args.suffix {
        opts.locality_suffix = suffix;
    }

    let mut progress = CliProgress { total: 0, kept: 0 };
    let summary = import::run(&opts, Some(&mut progress))
        .wrap_err("import aborted, nothing written")?;

    println!("Wrote {} ({} of {} rows kept)", opts.output.display(), progress.kept, summary.rows_seen);
    for (category, count) in &summary.by_category {
        println!("  {category}: {count}");
    }
    Ok(())
}

fn run_list(args: ListArgs) -> color_eyre::Result<()> {
    let records = store::load_records(&args.data)?;
    let categories = match args.categories.as_deref() {
        Some(path) => store::load_categories(Some(path))?,
        None => store::categories_beside(&args.data)?,
    };
    let catalog = Catalog::new(records, categories);

    let criteria = Criteria {
        search_text: args.search,
        category: args.category,
        chamber_only: args.chamber_only,
    };
    let order = if args.members_first { SortOrder::MembersFirst } else { SortOrder::Alphabetical };
    let view = DirectoryView::from_catalog(&catalog, &criteria, order);

    if view.is_empty() {
        return Err(eyre!("No businesses found matching your criteria."));
    }
    for r in view.iter() {
        let label = category_label(catalog.categories(), r.category).unwrap_or(r.category.id());
        let star = if r.is_chamber_member { "*" } else { " " };
        println!("{star} {:>4}  {:<32} {:<20} {}", r.id, r.name, label, r.tags.join(","));
    }
    println!("{} shop(s)", view.len());
    Ok(())
}

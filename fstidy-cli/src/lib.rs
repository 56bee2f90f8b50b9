use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fstidy_core::{CleanConfig, CleanResult, DirectoryCleaner, DirectoryStats, ExclusionSet};

pub mod config;

pub use config::CliConfig;

/// 统计命令的参数配置
#[derive(Debug)]
struct StatsCommandArgs {
    path: PathBuf,
    max_depth: Option<usize>,
    json: bool,
}

/// 清理命令的参数配置
#[derive(Debug)]
struct CleanCommandArgs {
    path: PathBuf,
    keep: Vec<String>,
    dry_run: bool,
    yes: bool,
    json: bool,
}

#[derive(Parser)]
#[command(name = "fstidy")]
#[command(about = "Directory cleanup and depth-bounded size statistics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file (defaults to <config dir>/fstidy/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count files, directories and total size under a directory
    Stats {
        /// Directory to measure
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Maximum depth to descend (0 = direct children only)
        #[arg(short, long)]
        max_depth: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete everything directly under a directory except the kept names
    Clean {
        /// Directory to clean (the directory itself is kept)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Entry names to keep (can be specified multiple times)
        #[arg(short = 'k', long = "keep", action = clap::ArgAction::Append)]
        keep: Vec<String>,

        /// Dry run - show what would be deleted without deleting
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a single file or directory tree
    Delete {
        /// Path to delete; a missing path is not an error
        path: PathBuf,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // 设置日志级别
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("fstidy_core={log_level},fstidy_cli={log_level}"))
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Stats {
            path,
            max_depth,
            json,
        } => handle_stats_command(
            StatsCommandArgs {
                path,
                max_depth,
                json,
            },
            &config,
        ),
        Commands::Clean {
            path,
            keep,
            dry_run,
            yes,
            json,
        } => handle_clean_command(
            CleanCommandArgs {
                path,
                keep,
                dry_run,
                yes,
                json,
            },
            &config,
        ),
        Commands::Delete { path, yes } => handle_delete_command(&path, yes, &config),
    }
}

fn handle_stats_command(args: StatsCommandArgs, config: &CliConfig) -> Result<()> {
    let max_depth = args.max_depth.unwrap_or(config.max_depth);
    let stats = fstidy_core::count_files_and_folders(&args.path, max_depth)?;

    if args.json {
        println!("{}", stats_to_json(&args.path, max_depth, &stats)?);
    } else {
        display_stats(&args.path, max_depth, &stats);
    }

    Ok(())
}

fn handle_clean_command(args: CleanCommandArgs, config: &CliConfig) -> Result<()> {
    let clean_config = create_clean_config(&args.keep, config, args.dry_run);
    let cleaner = DirectoryCleaner::new(clean_config);

    let preview = cleaner.preview(&args.path)?;
    if preview.removed.is_empty() {
        if args.json {
            println!("{}", clean_result_to_json(&preview)?);
        } else {
            println!("Nothing to delete.");
        }
        return Ok(());
    }

    if args.dry_run {
        if args.json {
            println!("{}", clean_result_to_json(&preview)?);
        } else {
            println!("Would delete {} entries:", preview.removed.len());
            display_clean_result(&preview, &args.path);
        }
        return Ok(());
    }

    // 确认清理
    if needs_confirmation(args.yes, config) {
        println!("Found {} entries to delete:", preview.removed.len());
        display_clean_result(&preview, &args.path);
        if !confirm(&format!(
            "\nThis will permanently delete {} entries under {}. Continue? [y/N]: ",
            preview.removed.len(),
            args.path.display()
        ))? {
            println!("Cleaning cancelled.");
            return Ok(());
        }
    }

    let result = cleaner
        .clean(&args.path)
        .with_context(|| format!("cleaning {} stopped", args.path.display()))?;

    if args.json {
        println!("{}", clean_result_to_json(&result)?);
    } else {
        println!("\nCleaning completed!");
        display_clean_result(&result, &args.path);
    }

    Ok(())
}

fn handle_delete_command(path: &Path, yes: bool, config: &CliConfig) -> Result<()> {
    if needs_confirmation(yes, config)
        && path.symlink_metadata().is_ok()
        && !confirm(&format!("Delete {}? [y/N]: ", path.display()))?
    {
        println!("Delete cancelled.");
        return Ok(());
    }

    fstidy_core::delete(path)?;
    println!("Deleted {}", path.display());
    Ok(())
}

fn create_clean_config(keep: &[String], config: &CliConfig, dry_run: bool) -> CleanConfig {
    let mut exclusions: ExclusionSet = config.keep.iter().cloned().collect();
    exclusions.extend(keep.iter().cloned());

    CleanConfig {
        exclusions,
        dry_run,
    }
}

fn needs_confirmation(yes: bool, config: &CliConfig) -> bool {
    !yes && config.confirm
}

fn stats_to_json(path: &Path, max_depth: usize, stats: &DirectoryStats) -> Result<String> {
    let report = serde_json::json!({
        "path": path,
        "max_depth": max_depth,
        "file_count": stats.file_count(),
        "directory_count": stats.directory_count(),
        "total_size": stats.total_size(),
        "total_size_kb": stats.total_size_kb(),
        "total_size_mb": stats.total_size_mb(),
        "total_size_gb": stats.total_size_gb(),
        "total_size_tb": stats.total_size_tb(),
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

fn clean_result_to_json(result: &CleanResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn display_stats(path: &Path, max_depth: usize, stats: &DirectoryStats) {
    println!("{} (max depth {max_depth})", path.display());
    println!("{}", "-".repeat(40));
    println!("{:<20} {}", "Files", stats.file_count());
    println!("{:<20} {}", "Directories", stats.directory_count());
    println!("{:<20} {}", "Total size", stats.formatted_size());
    println!("{}", "-".repeat(40));
    println!("{:<20} {}", "Bytes", stats.total_size());
    println!("{:<20} {:.2}", "KB", stats.total_size_kb());
    println!("{:<20} {:.2}", "MB", stats.total_size_mb());
    println!("{:<20} {:.4}", "GB", stats.total_size_gb());
    println!("{:<20} {:.6}", "TB", stats.total_size_tb());
}

fn display_clean_result(result: &CleanResult, base_path: &Path) {
    for path in &result.removed {
        println!("  - {}", relative_path(path, base_path).display());
    }

    if !result.kept.is_empty() {
        println!("Kept {} entries:", result.kept.len());
        for path in &result.kept {
            println!("  + {}", relative_path(path, base_path).display());
        }
    }
}

fn relative_path<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

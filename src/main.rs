use std::path::PathBuf;

use clap::{Parser, Subcommand};
use modrules::{AppError, DepScope, ShowFormat, TargetSelection};

#[derive(Parser)]
#[command(name = "modrules")]
#[command(version)]
#[command(
    about = "Inspect and export the RenderStream build-module rules",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the module descriptor for a revision
    #[clap(visible_alias = "s")]
    Show {
        /// Build-rules revision: initial or d3d12
        #[arg(short, long)]
        revision: Option<String>,
        /// Engine root directory for engine-relative include paths
        #[arg(short, long)]
        engine_root: Option<PathBuf>,
        /// Target config file (target.toml)
        #[arg(short, long)]
        target: Option<PathBuf>,
        /// Output format: json or text
        #[arg(short, long, default_value = "json")]
        format: String,
    },
    /// Emit compiler include flags in search order
    #[clap(visible_alias = "f")]
    Flags {
        /// Build-rules revision: initial or d3d12
        #[arg(short, long)]
        revision: Option<String>,
        /// Engine root directory for engine-relative include paths
        #[arg(short, long)]
        engine_root: Option<PathBuf>,
        /// Target config file (target.toml)
        #[arg(short, long)]
        target: Option<PathBuf>,
    },
    /// List dependency module names for a dependency class
    #[clap(visible_alias = "d")]
    Deps {
        /// Build-rules revision: initial or d3d12
        #[arg(short, long)]
        revision: Option<String>,
        /// Target config file (target.toml)
        #[arg(short, long)]
        target: Option<PathBuf>,
        /// Dependency class: public, private, dynamic, or all
        #[arg(short, long, default_value = "public")]
        scope: String,
    },
    /// Validate the rules tables of every known revision
    #[clap(visible_alias = "c")]
    Check,
}

fn parse_scope(scope: &str) -> Result<DepScope, AppError> {
    DepScope::ALL
        .into_iter()
        .find(|candidate| candidate.key_name() == scope.to_lowercase())
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown scope '{scope}': must be public, private, dynamic, or all"
            ))
        })
}

fn parse_format(format: &str) -> Result<ShowFormat, AppError> {
    match format.to_lowercase().as_str() {
        "json" => Ok(ShowFormat::Json),
        "text" => Ok(ShowFormat::Text),
        _ => Err(AppError::Validation(format!("Unknown format '{format}': must be json or text"))),
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Show { revision, engine_root, target, format } => {
            let selection =
                TargetSelection::resolve(target.as_deref(), revision.as_deref(), engine_root)?;
            let format = parse_format(&format)?;
            let engine_root = selection.engine_root.as_deref();
            let output = modrules::describe_rendered(selection.revision, engine_root, format)?;
            println!("{output}");
        }
        Commands::Flags { revision, engine_root, target } => {
            let selection =
                TargetSelection::resolve(target.as_deref(), revision.as_deref(), engine_root)?;
            for flag in
                modrules::include_flags(selection.revision, selection.engine_root.as_deref())?
            {
                println!("{flag}");
            }
        }
        Commands::Deps { revision, target, scope } => {
            let selection = TargetSelection::resolve(target.as_deref(), revision.as_deref(), None)?;
            let scope = parse_scope(&scope)?;
            for name in modrules::dependency_names(selection.revision, scope)? {
                println!("{name}");
            }
        }
        Commands::Check => {
            let outcome = modrules::check()?;
            if outcome.is_ok() {
                println!("✅ All rules tables are sound");
            } else {
                for finding in &outcome.findings {
                    eprintln!("{finding}");
                }
                return Err(AppError::Validation("Rules table check failed".into()));
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

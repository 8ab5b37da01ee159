use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use apk_namer::cli::orchestration::{run_rename_workflow, RenameWorkflowArgs};
use apk_namer::{config, logging, ui, PreReleasePolicy};

#[derive(clap::Parser)]
#[command(
    name = "apk-namer",
    about = "Name and rename Android build artifacts from their version and build number",
    disable_version_flag = true
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Configured product to name")]
    product: Option<String>,

    #[arg(long, help = "Override the product's app name")]
    app_name: Option<String>,

    #[arg(long, help = "Version name, e.g. 0.3.0")]
    version_name: Option<String>,

    #[arg(long, help = "Build number, e.g. 9")]
    build_number: Option<u64>,

    #[arg(long, help = "Read version and build number from a Flutter pubspec.yaml")]
    pubspec: Option<PathBuf>,

    #[arg(
        long,
        help = "Replace the product's pre-release policy (zero-major, never, always)"
    )]
    policy: Option<PreReleasePolicy>,

    #[arg(long, conflicts_with = "no_beta", help = "Always add the pre-release marker")]
    beta: bool,

    #[arg(long, help = "Never add the pre-release marker")]
    no_beta: bool,

    #[arg(long, help = "Build output to rename in place")]
    apk: Option<PathBuf>,

    #[arg(long, help = "Replace an existing file with the computed name")]
    overwrite: bool,

    #[arg(long, help = "Preview the rename without touching the filesystem")]
    dry_run: bool,

    #[arg(long, help = "Show configured products and exit")]
    list: bool,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Log diagnostics to stderr (repeat for more)"
    )]
    verbose: u8,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

impl Args {
    fn pre_release_override(&self) -> Option<bool> {
        match (self.beta, self.no_beta) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn workflow_args(&self) -> RenameWorkflowArgs {
        RenameWorkflowArgs {
            product: self.product.clone(),
            app_name: self.app_name.clone(),
            version_name: self.version_name.clone(),
            build_number: self.build_number,
            pubspec: self.pubspec.clone(),
            policy: self.policy,
            pre_release: self.pre_release_override(),
            apk: self.apk.clone(),
            overwrite: self.overwrite,
            dry_run: self.dry_run,
        }
    }
}

fn no_products_message(config_path: Option<&Path>) -> String {
    match config_path {
        Some(path) => format!("No products configured in {}", path.display()),
        None => "No products configured".to_string(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("apk-namer {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(args.verbose)?;

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.list {
        if config.products.is_empty() {
            ui::display_error(&no_products_message(args.config.as_deref()));
            std::process::exit(1);
        }
        ui::display_available_products(&config);
        return Ok(());
    }

    let result = match run_rename_workflow(&args.workflow_args(), &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_warning(warning);
    }

    match &result.outcome {
        Some(outcome) => ui::display_rename_outcome(outcome),
        None => println!("{}", result.artifact_name),
    }

    Ok(())
}

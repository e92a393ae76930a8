//! deadrole CLI - unused role detector for Ansible repositories.
//!
//! Prints every role of the roles directory that the playbook never reaches,
//! directly or through declared role dependencies, one per line in
//! ascending order.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use deadrole_core::{
    generate_dot, init_structured_logging, load_config, log_info, log_warn, print_json,
    print_plain, Deadrole, DeadroleConfig, RolesError,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find Ansible roles that a playbook never uses")]
pub struct Cli {
    /// Path to the Ansible playbook YAML file
    #[arg(long, value_name = "FILE")]
    playbook: PathBuf,

    /// Path to the Ansible roles directory
    #[arg(long, value_name = "DIR")]
    roles: PathBuf,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Role names or patterns (`prefix*`, `*suffix`) never reported as unused
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,

    /// Generate Graphviz DOT output for role dependencies
    #[arg(long)]
    dot: bool,

    /// Write DOT output to a specified file instead of stdout
    #[arg(long)]
    dot_file: Option<String>,

    /// Configuration file; none is read unless this is given
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Effective settings after merging the command line with the config file.
#[derive(Debug, Default, PartialEq)]
struct Settings {
    ignore: Vec<String>,
    json: bool,
}

/// Merges CLI flags with an optional config; CLI flags only ever add.
fn merge_settings(cli: &Cli, config: Option<DeadroleConfig>) -> Settings {
    let mut settings = Settings {
        ignore: cli.ignore.clone(),
        json: cli.json,
    };

    if let Some(cfg) = config {
        settings.json |= cfg.wants_json();
        if let Some(list) = cfg.ignore {
            settings.ignore.extend(list);
        }
    }

    settings
}

/// Loads the config named by `--config`; a broken config is reported and skipped.
///
/// Without `--config` no file is read, so results never depend on the
/// working directory.
fn load_settings(cli: &Cli) -> Settings {
    let config = cli.config.as_deref().and_then(|path| match load_config(path) {
        Ok(cfg) => {
            log_info(&format!("loaded configuration file {}", path.display()));
            Some(cfg)
        }
        Err(e) => {
            let warning = config_warning(&e);
            log_warn(&warning);
            eprintln!("[WARN] {}", warning);
            None
        }
    });

    merge_settings(cli, config)
}

/// One-line warning for a config that could not be loaded.
fn config_warning(err: &anyhow::Error) -> String {
    format!("config load failed: {:#}", err)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Security: Validates output file paths to prevent path traversal attacks.
///
/// Rejects:
/// - Absolute paths (must be relative to current directory)
/// - Paths containing `..` (parent directory traversal)
/// - Paths with null bytes (injection attacks)
fn validate_output_path(path: &str) -> Result<PathBuf> {
    if path.contains('\0') {
        return Err(anyhow!("Output path contains null bytes"));
    }

    let p = PathBuf::from(path);

    if p.is_absolute() {
        return Err(anyhow!(
            "Output path must be relative, not absolute: {}",
            path
        ));
    }

    if p
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir))
    {
        return Err(anyhow!(
            "Path traversal (..) not allowed in output paths: {}",
            path
        ));
    }

    Ok(p)
}

fn run(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli);

    let result = Deadrole::new(&cli.playbook, &cli.roles)
        .ignore_patterns(settings.ignore.iter().cloned())
        .analyze()?;

    if cli.dot || cli.dot_file.is_some() {
        let dot = generate_dot(&result);
        match &cli.dot_file {
            Some(file) => {
                let safe_path = validate_output_path(file)?;
                fs::write(&safe_path, &dot)
                    .with_context(|| format!("DOT write failed to {}", safe_path.display()))?;
            }
            None => {
                print!("{}", dot);
                return Ok(());
            }
        }
    }

    if settings.json {
        print_json(&result);
    } else {
        print_plain(&result.unused);
    }

    Ok(())
}

/// Renders an error as a single line.
fn render_error(err: &anyhow::Error) -> String {
    // RolesError already embeds its cause chain in Display
    match err.downcast_ref::<RolesError>() {
        Some(roles_err) => roles_err.to_string(),
        None => format!("{:#}", err),
    }
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] deadrole internal error: {}", info);
    }));

    init_structured_logging();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", render_error(&e));
        std::process::exit(1);
    }
}

//! CLI for patch-issue.
//!
//! Suggests or drafts a GitHub issue for a dependency that was just patched.

use clap::{Parser, Subcommand};
use patch_issue::{
    maybe_print_issue_creation_prompt, BrowserOpener, IssueLauncher, IssueSettings, LaunchError,
    NoopBrowser, PackageDescriptor, PackageManager, PatchSubmission, SystemBrowser,
    SETTINGS_FILE_NAME,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// patch-issue - Draft a GitHub issue for a patched dependency.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project root containing package.json and node_modules.
    #[arg(long, default_value = ".")]
    app_root: PathBuf,

    /// Path to the settings file (defaults to patch-issue.toml in the project root).
    #[arg(long, env = "PATCH_ISSUE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a suggestion to draft an issue, if the package is on GitHub.
    Suggest {
        /// Package path specifier (e.g. `left-pad`, `@types/node` or `a/b`).
        path_specifier: String,

        /// Package manager to suggest the command for (detected from lockfiles if omitted).
        #[arg(long)]
        package_manager: Option<PackageManager>,
    },

    /// Draft an issue containing a patch and open it in the browser.
    CreateIssue {
        /// Package path specifier (e.g. `left-pad`, `@types/node` or `a/b`).
        path_specifier: String,

        /// Patch file whose contents go into the issue.
        #[arg(long)]
        patch_file: PathBuf,

        /// Installed package directory (defaults to node_modules/<path specifier>).
        #[arg(long)]
        package_dir: Option<PathBuf>,

        /// Package version (defaults to the version in the package's manifest).
        #[arg(long)]
        package_version: Option<String>,

        /// Print the issue URL instead of opening a browser.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Failures surfaced by [`run`].
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Launch(#[from] LaunchError),
    #[error(transparent)]
    Config(#[from] patch_issue::ConfigError),
    #[error(transparent)]
    Manifest(#[from] patch_issue::ManifestError),
    #[error("Failed to read patch file '{path}': {source}")]
    Patch {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Launch(e @ LaunchError::VcsNotFound { .. })) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so they never mix with the suggestion text or URL.
/// Filtering follows `RUST_LOG` and defaults to "warn".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Main execution logic.
fn run(args: Args) -> Result<(), CliError> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| args.app_root.join(SETTINGS_FILE_NAME));
    let settings = IssueSettings::load(&config_path)?;

    match args.command {
        Command::Suggest {
            path_specifier,
            package_manager,
        } => {
            let package = PackageDescriptor::load(&args.app_root, &path_specifier)?;
            let package_manager =
                package_manager.unwrap_or_else(|| PackageManager::detect(&args.app_root));
            maybe_print_issue_creation_prompt(
                &package,
                package_manager,
                &settings.policy(),
                &mut std::io::stdout(),
            )?;
            Ok(())
        }
        Command::CreateIssue {
            path_specifier,
            patch_file,
            package_dir,
            package_version,
            dry_run,
        } => {
            let package = match package_dir {
                Some(dir) => PackageDescriptor::from_dir(dir, &path_specifier)?,
                None => PackageDescriptor::load(&args.app_root, &path_specifier)?,
            };
            let patch_contents = read_patch(&patch_file)?;
            let package_version = match package_version {
                Some(version) => version,
                None => package.require_version()?.to_string(),
            };
            let patch_path = patch_file.to_string_lossy();
            let submission = PatchSubmission {
                package: &package,
                package_version: &package_version,
                patch_contents: &patch_contents,
                patch_path: &patch_path,
            };

            if dry_run {
                let draft = launch(settings, NoopBrowser, &submission)?;
                println!("{}", draft.url);
            } else {
                launch(settings, SystemBrowser, &submission)?;
            }
            Ok(())
        }
    }
}

fn launch<B: BrowserOpener>(
    settings: IssueSettings,
    browser: B,
    submission: &PatchSubmission<'_>,
) -> Result<patch_issue::IssueDraft, CliError> {
    let launcher = IssueLauncher::new(settings, browser);
    Ok(launcher.open_issue_creation_link(submission, &mut std::io::stdout())?)
}

fn read_patch(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::Patch {
        path: path.display().to_string(),
        source: e,
    })
}

//! CLI definitions using clap derive API
//!
//! The installer and uninstaller are separate executables with a small flat
//! flag surface each; no subcommands.

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// RuPing standalone installer
#[derive(Parser, Debug)]
#[command(
    name = "ruping-installer",
    version,
    styles = styles(),
    about = "Installs the RuPing network diagnostic tool",
    long_about = "Deploys ruping.exe, its uninstaller, and the alias launcher scripts \
                  into the installation directory, registers that directory on the \
                  system PATH, and creates a Start Menu shortcut.",
    after_help = "EXAMPLES:\n  \
                  Default installation:\n    ruping-installer\n\n\
                  Custom directory:\n    ruping-installer --install-path D:\\Tools\\RuPing\n\n\
                  Without touching the system PATH:\n    ruping-installer --no-path\n\n\
                  Unattended:\n    ruping-installer --silent"
)]
pub struct InstallerArgs {
    /// Custom installation directory
    #[arg(long, value_name = "DIR")]
    pub install_path: Option<PathBuf>,

    /// Don't add the installation directory to the system PATH
    #[arg(long)]
    pub no_path: bool,

    /// Silent installation (no prompts or progress output)
    #[arg(long)]
    pub silent: bool,
}

/// RuPing standalone uninstaller
#[derive(Parser, Debug)]
#[command(
    name = "ruping-uninstaller",
    version,
    styles = styles(),
    about = "Removes a RuPing installation",
    long_about = "Locates an existing RuPing installation, removes its PATH \
                  registration and Start Menu shortcut, and deletes the files the \
                  installer recorded. User-added files are left in place.",
    after_help = "EXAMPLES:\n  \
                  Interactive uninstall:\n    ruping-uninstaller\n\n\
                  Specific directory:\n    ruping-uninstaller --install-path D:\\Tools\\RuPing\n\n\
                  Unattended:\n    ruping-uninstaller --silent"
)]
pub struct UninstallerArgs {
    /// Installation directory to remove
    #[arg(long, value_name = "DIR")]
    pub install_path: Option<PathBuf>,

    /// Silent uninstallation (no prompts, auto-confirm)
    #[arg(long)]
    pub silent: bool,
}

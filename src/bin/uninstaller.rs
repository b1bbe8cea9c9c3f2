//! RuPing standalone uninstaller binary

use clap::Parser;

use ruping_setup::cli::UninstallerArgs;
use ruping_setup::commands;
use ruping_setup::error::SetupError;

fn main() {
    let args = UninstallerArgs::parse();

    if let Err(e) = commands::uninstall::run(args) {
        match e {
            SetupError::UserCancelled => eprintln!("Uninstall cancelled."),
            e => eprintln!("ERROR: {e}"),
        }
        std::process::exit(1);
    }
}

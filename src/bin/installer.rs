//! RuPing standalone installer binary

use clap::Parser;

use ruping_setup::cli::InstallerArgs;
use ruping_setup::commands;
use ruping_setup::error::SetupError;

fn main() {
    let args = InstallerArgs::parse();

    if let Err(e) = commands::install::run(args) {
        match e {
            SetupError::UserCancelled => eprintln!("Installation cancelled."),
            e => eprintln!("ERROR: {e}"),
        }
        std::process::exit(1);
    }
}

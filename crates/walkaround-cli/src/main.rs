//! `walkaround` binary: parses the command line, installs logging and runs
//! the selected command against stdout.

use walkaround_cli::{cli, init_tracing, run};

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let stdout = std::io::stdout();
    if let Err(e) = run(&matches, &mut stdout.lock()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

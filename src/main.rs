use clap::Parser;
use rolo::application::Session;
use rolo::cli::{repl, Cli};
use rolo::error::RoloError;
use rolo::infrastructure::SnapshotStore;
use std::io;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), RoloError> {
    let session = Session::new(SnapshotStore::new(cli.book_path()));

    println!("Welcome to the assistant bot!");

    // 1. Load the snapshot (missing file means a fresh, empty book)
    let mut book = session.open()?;

    // 2. Drive the interactive loop until close/exit or end of input
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut book, stdin.lock(), stdout.lock())?;

    // 3. Persist the whole book back to the snapshot
    session.close(&book)
}

//! Replay an action file through the engine and print the result lines.
//!
//! Usage: `replay [actions.txt]`

use crossbook::Engine;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "actions.txt".into());
    let actions = BufReader::new(File::open(&path)?);

    let mut engine = Engine::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in actions.lines() {
        let line = line?;
        for result in engine.apply(&line) {
            writeln!(out, "{result}")?;
        }
    }
    Ok(())
}

//! Saving, loading, and appending BSV files.
//!
//! Run with: `cargo run --example persistence`

use bsv::{bsv, pretty, store};

fn main() -> bsv::Result<()> {
    let dir = std::env::temp_dir().join("bsv-demo");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("log.bsv");

    // Start fresh so repeated runs behave the same.
    if path.exists() {
        std::fs::remove_file(&path)?;
    }

    // The first append creates the file with no leading line break.
    store::append(&bsv![["started", null]], &path)?;

    // Later appends join with a single line-break marker.
    store::append(&bsv![["progress", "50%"]], &path)?;
    store::append(&bsv![["finished", ""]], &path)?;

    let log = store::load(&path)?;
    println!("log at {}:\n{}", path.display(), pretty(&log));

    // Whole-file save replaces the log.
    store::save(&bsv![["truncated"]], &path)?;
    println!("\nafter save:\n{}", pretty(&store::load(&path)?));

    Ok(())
}

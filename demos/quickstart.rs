//! Your first BSV experience: encode a table, look at the bytes, decode it
//! back, and pretty-print the result.
//!
//! Run with: `cargo run --example quickstart`

use bsv::{bsv, decode, encode, pretty};

fn main() -> bsv::Result<()> {
    let table = bsv![
        ["Hello", "🌎", null, ""],
        ["A\0B\nC", "Test 𝄞"],
    ];

    println!("table:\n{}", pretty(&table));

    let bytes = encode(&table);
    println!("\nencoded ({} bytes):", bytes.len());
    for chunk in bytes.chunks(16) {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
        println!("  {}", hex.join(" "));
    }

    let decoded = decode(&bytes)?;
    println!("\ndecoded:\n{}", pretty(&decoded));
    assert_eq!(decoded, table);

    Ok(())
}

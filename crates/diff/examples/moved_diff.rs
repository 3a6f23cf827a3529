use anyhow::Result;
use shams_diff::{split_rows, unified_text, DiffConfig, Line};
use std::time::Duration;

fn main() -> Result<()> {
    let original = "use std::io;\n\nfn helper() -> u32 {\n    42\n}\n\nfn main() {\n    println!(\"{}\", helper());\n}\n";
    let modified = "use std::io;\n\nfn main() {\n    println!(\"{}\", helper());\n}\n\nfn helper() -> u32 {\n    42\n}\n";

    let result = DiffConfig::default()
        .detect_moved(true)
        .ignore_whitespace(true)
        .timeout(Duration::from_secs(1))
        .compare(original, modified)?;

    println!("Unified (< moved from here, > moved to here):");
    print!("{}", unified_text(&result.unified));

    println!("\nSplit:");
    for (left, right) in split_rows(&result.split) {
        println!(
            "{:<32} | {}",
            left.map(Line::content).unwrap_or(""),
            right.map(Line::content).unwrap_or("")
        );
    }

    let stats = result.stats();
    println!(
        "\n{} moved, {} added, {} deleted, {} unchanged",
        stats.moved, stats.added, stats.deleted, stats.unchanged
    );

    Ok(())
}

use anyhow::Result;
use shams_diff::{compare, marker, DiffOptions, LineKind, TextDiff};

fn main() -> Result<()> {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    println!("Unified diff:");
    print!("{}", TextDiff::unified_text(text1, text2, DiffOptions::default())?);

    let result = compare(text1, text2, DiffOptions::default())?;
    let stats = result.stats();

    println!("\nDiff statistics:");
    println!("  Added lines: {}", stats.added);
    println!("  Deleted lines: {}", stats.deleted);
    println!("  Unchanged lines: {}", stats.unchanged);

    println!("\nLines with kinds:");
    for line in &result.unified {
        let number = line
            .line_number()
            .map(|n| format!("{:>3}", n))
            .unwrap_or_else(|| "   ".to_string());
        let color = match line.kind() {
            LineKind::Added => "\x1b[32m",
            LineKind::Deleted => "\x1b[31m",
            LineKind::Moved => "\x1b[36m",
            LineKind::Unchanged => "\x1b[37m",
        };
        println!("{} {}{}{}\x1b[0m", number, color, marker(line), line.content());
    }

    println!("\nSide by side line numbers:");
    for (side, lines) in [("left", &result.split.left), ("right", &result.split.right)] {
        let numbers: Vec<String> = lines
            .iter()
            .filter_map(|line| line.line_number())
            .map(|n| n.to_string())
            .collect();
        println!("  {}: {}", side, numbers.join(", "));
    }

    Ok(())
}

use anyhow::Result;
use shams_diff::{compare, DiffOptions, Line};

fn highlight(line: &Line, color: &str) -> String {
    match line.segments() {
        Some(segments) => segments
            .iter()
            .map(|segment| {
                if segment.highlighted {
                    format!("{}{}\x1b[0m", color, segment.text)
                } else {
                    segment.text.clone()
                }
            })
            .collect(),
        None => line.content().to_string(),
    }
}

fn main() -> Result<()> {
    // Sample texts with word-level differences
    let text1 = "This is the first paragraph with some words.\nHere is another line with minor changes.\nThis line is unchanged.";
    let text2 = "This is the first paragraph with different words.\nHere is another sentence with major changes.\nThis line is unchanged.";

    let result = compare(text1, text2, DiffOptions::default())?;

    println!("=== Word-level highlights ===");
    for line in &result.unified {
        let rendered = match line.kind() {
            shams_diff::LineKind::Deleted => format!("-{}", highlight(line, "\x1b[41m")),
            shams_diff::LineKind::Added => format!("+{}", highlight(line, "\x1b[42m")),
            _ => format!(" {}", line.content()),
        };
        println!("{}", rendered);
    }

    // Example with code
    let code1 = "function calculateTotal(items) {\n    let sum = 0;\n        sum += items[i].price;\n    return sum;\n}";
    let code2 = "function calculateTotal(items) {\n    let sum = 0;\n        sum += items[i].price * items[i].quantity;\n    return sum;\n}";

    println!("\n=== Segments of a changed code line ===");
    let result = compare(code1, code2, DiffOptions::default())?;
    for line in result.unified.iter().filter(|line| line.segments().is_some()) {
        println!("{} line:", line.kind());
        for segment in line.segments().unwrap_or_default() {
            println!(
                "  {:>3}..{:<3} {} {:?}",
                segment.start,
                segment.end,
                if segment.highlighted { "*" } else { " " },
                segment.text
            );
        }
    }

    Ok(())
}

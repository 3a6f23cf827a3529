//! Terminal rendering of a diff result.

use colored::{Color, Colorize};
use shams_diff::{marker, split_rows, DiffResult, DiffStats, Line, LineKind};
use std::io::{self, Write};

/// Widest left column in the split view, in characters
const MAX_SPLIT_WIDTH: usize = 60;

fn line_color(line: &Line) -> Option<Color> {
    match line.kind() {
        LineKind::Added => Some(Color::Green),
        LineKind::Deleted => Some(Color::Red),
        LineKind::Moved if line.moved_to().is_some() => Some(Color::Yellow),
        LineKind::Moved => Some(Color::Cyan),
        LineKind::Unchanged => None,
    }
}

/// Render one line's text, highlighting changed segments
fn paint_content(line: &Line, color: bool) -> String {
    let tint = match line_color(line) {
        Some(tint) if color => tint,
        _ => return line.content().to_string(),
    };

    match line.segments() {
        Some(segments) => segments
            .iter()
            .map(|segment| {
                if segment.highlighted {
                    segment.text.as_str().color(Color::Black).on_color(tint).to_string()
                } else {
                    segment.text.as_str().color(tint).to_string()
                }
            })
            .collect(),
        None => line.content().color(tint).to_string(),
    }
}

fn paint_prefix(text: String, line: &Line, color: bool) -> String {
    match line_color(line) {
        Some(tint) if color => text.color(tint).to_string(),
        _ => text,
    }
}

fn number(line: Option<&Line>) -> String {
    line.and_then(Line::line_number)
        .map(|n| format!("{:>4}", n))
        .unwrap_or_else(|| "    ".to_string())
}

/// Write the single-column view
pub fn write_unified(out: &mut impl Write, result: &DiffResult, color: bool) -> io::Result<()> {
    for line in &result.unified {
        let prefix = paint_prefix(format!("{} {}", number(Some(line)), marker(line)), line, color);
        writeln!(out, "{} {}", prefix, paint_content(line, color))?;
    }
    Ok(())
}

/// Write the two-column view
pub fn write_split(out: &mut impl Write, result: &DiffResult, color: bool) -> io::Result<()> {
    let width = result
        .split
        .left
        .iter()
        .map(|line| line.content().chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_SPLIT_WIDTH);

    for (left, right) in split_rows(&result.split) {
        let left_cell = match left {
            Some(line) => {
                let shown = line.content().chars().count();
                let padding = " ".repeat(width.saturating_sub(shown));
                format!(
                    "{} {}{}",
                    paint_prefix(marker(line).to_string(), line, color),
                    paint_content(line, color),
                    padding
                )
            }
            None => " ".repeat(width + 2),
        };
        let right_cell = match right {
            Some(line) => format!(
                "{} {}",
                paint_prefix(marker(line).to_string(), line, color),
                paint_content(line, color)
            ),
            None => String::new(),
        };

        let row = format!(
            "{} {} | {} {}",
            number(left),
            left_cell,
            number(right),
            right_cell
        );
        writeln!(out, "{}", row.trim_end())?;
    }
    Ok(())
}

/// Write the result as pretty-printed JSON
pub fn write_json(out: &mut impl Write, result: &DiffResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}

pub fn write_stats(out: &mut impl Write, stats: &DiffStats) -> io::Result<()> {
    writeln!(
        out,
        "{} added, {} deleted, {} moved, {} unchanged",
        stats.added, stats.deleted, stats.moved, stats.unchanged
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shams_diff::{compare, DiffOptions};

    fn render(write: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_unified_plain() {
        let result = compare("a\nb\nc", "a\nx\nc", DiffOptions::default()).unwrap();
        let text = render(|out| write_unified(out, &result, false));

        assert_eq!(text, "   1   a\n     - b\n     + x\n   2   c\n");
    }

    #[test]
    fn test_split_plain() {
        let result = compare("one\ntwo\nthree", "one\n2\nthree\nfour", DiffOptions::default()).unwrap();
        let text = render(|out| write_split(out, &result, false));

        let expected = [
            "   1   one   |    1   one",
            "   2 - two   |    2 + 2",
            "   3   three |    3   three",
            "             |    4 + four",
        ]
        .join("\n")
            + "\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_output() {
        let result = compare("a", "b", DiffOptions::default()).unwrap();
        let text = render(|out| write_json(out, &result));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["unified"][0]["kind"], "deleted");
        assert_eq!(value["unified"][1]["content"], "b");
        assert_eq!(value["split"]["right"][0]["lineNumber"], 1);
    }

    #[test]
    fn test_json_move_links() {
        let options = DiffOptions::new().detect_moved(true);
        let result = compare("a\nb\nc", "b\nc\na", options).unwrap();
        let text = render(|out| write_json(out, &result));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let left = &value["split"]["left"][0];
        assert_eq!(left["kind"], "moved");
        assert_eq!(left["movedTo"], 2);
        assert!(left.get("movedFrom").is_none());

        let right = &value["split"]["right"][2];
        assert_eq!(right["movedFrom"], 0);
        assert!(right.get("movedTo").is_none());

        // Lines that did not move carry neither field
        let unchanged = &value["split"]["left"][1];
        assert!(unchanged.get("movedTo").is_none());
        assert!(unchanged.get("movedFrom").is_none());
        assert!(unchanged.get("moved").is_none());
    }

    #[test]
    fn test_stats_line() {
        let stats = DiffStats {
            added: 2,
            deleted: 1,
            unchanged: 4,
            moved: 0,
        };
        assert_eq!(
            render(|out| write_stats(out, &stats)),
            "2 added, 1 deleted, 0 moved, 4 unchanged\n"
        );
    }
}

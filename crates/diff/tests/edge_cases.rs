use shams_diff::{
    compare, DiffConfig, DiffOptions, Exhaustion, LineKind, Side, TextDiff, DEFAULT_MAX_LINES,
};
use std::time::Duration;

#[test]
fn test_newlines_at_end() {
    // Trailing newlines do not produce an extra empty line
    let cases = [
        ("Line 1\nLine 2\n", "Line 1\nLine X\n"),
        ("Line 1\nLine 2\n", "Line 1\nLine X"),
        ("Line 1\nLine 2", "Line 1\nLine X\n"),
        ("Line 1\nLine 2", "Line 1\nLine X"),
    ];

    for (old, new) in cases {
        let result = compare(old, new, DiffOptions::default()).unwrap();
        assert_eq!(result.unified.len(), 3, "{:?} -> {:?}", old, new);
        assert_eq!(result.split.left.len(), 2);
        assert_eq!(result.split.right.len(), 2);
    }
}

#[test]
fn test_line_endings_are_universal() {
    let result = compare("a\r\nb\r\n", "a\nb\n", DiffOptions::default()).unwrap();
    assert!(!result.has_changes());

    let result = compare("a\rb", "a\nb", DiffOptions::default()).unwrap();
    assert!(!result.has_changes());
}

#[test]
fn test_blank_lines_are_lines() {
    let result = compare("a\n\nb", "a\nb", DiffOptions::default()).unwrap();

    let deleted: Vec<_> = result
        .unified
        .iter()
        .filter(|line| line.kind() == LineKind::Deleted)
        .map(|line| line.content())
        .collect();
    assert_eq!(deleted, vec![""]);
}

#[test]
fn test_very_large_diff() {
    let mut old = String::new();
    let mut new = String::new();

    // 1000 lines, every 10th one different
    for i in 0..1000 {
        old.push_str(&format!("Line {} of old text\n", i));
        if i % 10 == 0 {
            new.push_str(&format!("MODIFIED Line {} of new text\n", i));
        } else {
            new.push_str(&format!("Line {} of old text\n", i));
        }
    }

    let result = compare(&old, &new, DiffOptions::default()).unwrap();
    let stats = result.stats();

    assert_eq!(stats.added, 100);
    assert_eq!(stats.deleted, 100);
    assert_eq!(stats.unchanged, 900);

    // Every replaced line sits next to its replacement and is refined
    let refined = result
        .unified
        .iter()
        .filter(|line| line.segments().is_some())
        .count();
    assert_eq!(refined, 200);
}

#[test]
fn test_unicode_text() {
    let old = "Line 1\nLine 2 🚀\nLine 3 😊\n";
    let new = "Line 1\nLine 2 🚀\nLine 3 🎉\n";

    let result = compare(old, new, DiffOptions::default()).unwrap();
    assert!(result.has_changes());

    let deleted = &result.unified[2];
    assert_eq!(deleted.kind(), LineKind::Deleted);
    let segments = deleted.segments().unwrap();
    let changed = segments.iter().find(|segment| segment.highlighted).unwrap();
    assert_eq!(changed.text, "😊");
    assert_eq!(&deleted.content()[changed.start..changed.end], "😊");

    let text = TextDiff::unified_text(old, new, DiffOptions::default()).unwrap();
    assert!(text.contains("-Line 3 😊"));
    assert!(text.contains("+Line 3 🎉"));
}

#[test]
fn test_diff_with_only_whitespace_changes() {
    let old = "Line 1\nLine 2\nLine 3\n";
    let new = "Line 1\nLine  2\nLine 3\n";

    let result = compare(old, new, DiffOptions::default()).unwrap();
    assert!(result.has_changes());

    let ignoring = DiffOptions::new().ignore_whitespace(true);
    let result = compare(old, new, ignoring).unwrap();
    assert!(!result.has_changes());
    // The displayed text is the original, not the normalized key
    assert_eq!(result.split.right[1].content(), "Line  2");
}

#[test]
fn test_whitespace_only_lines_match_empty_lines() {
    let options = DiffOptions::new().ignore_whitespace(true);
    let result = compare("a\n   \nb", "a\n\nb", options).unwrap();

    assert!(!result.has_changes());
    assert_eq!(result.unified.len(), 3);
}

#[test]
fn test_line_limit_is_resource_exhaustion() {
    let config = DiffConfig::default().max_lines(2);

    let err = config.compare("a\nb\nc", "a").unwrap_err();
    assert!(err.is_resource_exhausted());
    assert_eq!(
        err.exhaustion(),
        &Exhaustion::LineLimit {
            side: Side::Original,
            lines: 3,
            limit: 2
        }
    );

    // Within the limit the comparison succeeds
    assert!(config.compare("a\nb", "b\nc").is_ok());
}

#[test]
fn test_default_compare_is_bounded() {
    let oversized = "line\n".repeat(DEFAULT_MAX_LINES + 1);

    let err = compare("line", &oversized, DiffOptions::default()).unwrap_err();
    assert!(err.is_resource_exhausted());
    assert_eq!(
        err.exhaustion(),
        &Exhaustion::LineLimit {
            side: Side::Modified,
            lines: DEFAULT_MAX_LINES + 1,
            limit: DEFAULT_MAX_LINES
        }
    );

    // Lifting the limits accepts the same input
    let result = DiffConfig::default()
        .unbounded()
        .compare("line", &oversized)
        .unwrap();
    assert_eq!(result.stats().added, DEFAULT_MAX_LINES);
}

#[test]
fn test_deadline_is_resource_exhaustion() {
    let err = DiffConfig::default()
        .timeout(Duration::ZERO)
        .compare("a\nb", "a\nc")
        .unwrap_err();

    assert_eq!(err.exhaustion(), &Exhaustion::Deadline(Duration::ZERO));
}

#[test]
fn test_result_clone() {
    let result = compare("Line 1\nLine 2\n", "Line 1\nLine X\n", DiffOptions::default()).unwrap();
    let copy = result.clone();

    assert_eq!(result, copy);
    assert_eq!(result.stats(), copy.stats());
}

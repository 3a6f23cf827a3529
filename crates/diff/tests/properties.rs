use proptest::prelude::*;
use shams_diff::{compare, split_lines, DiffOptions, Line, LineKind};

fn document() -> impl Strategy<Value = String> {
    // Small alphabet so lines repeat and moves happen
    prop::collection::vec("[abcAB ]{0,6}", 0..12).prop_map(|lines| lines.join("\n"))
}

fn options() -> impl Strategy<Value = DiffOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(ws, case, moved)| {
        DiffOptions::new()
            .ignore_whitespace(ws)
            .ignore_case(case)
            .detect_moved(moved)
    })
}

fn contents<'a>(lines: impl Iterator<Item = &'a Line>) -> Vec<String> {
    lines.map(|line| line.content().to_string()).collect()
}

proptest! {
    #[test]
    fn identity_has_no_changes(text in document(), options in options()) {
        let result = compare(&text, &text, options).unwrap();
        prop_assert!(result.unified.iter().all(|line| line.kind() == LineKind::Unchanged));
        prop_assert_eq!(result.split.left.len(), result.split.right.len());
    }

    #[test]
    fn unified_reconstructs_both_texts(old in document(), new in document()) {
        let result = compare(&old, &new, DiffOptions::default()).unwrap();

        let original = contents(result.unified.iter().filter(|line| line.kind() != LineKind::Added));
        let modified = contents(result.unified.iter().filter(|line| line.kind() != LineKind::Deleted));
        prop_assert_eq!(original, split_lines(&old));
        prop_assert_eq!(modified, split_lines(&new));
    }

    #[test]
    fn split_sides_are_complete(old in document(), new in document(), options in options()) {
        let result = compare(&old, &new, options).unwrap();

        let old_side = result.unified.iter().filter(|line| line.is_old_side()).count();
        let new_side = result.unified.iter().filter(|line| line.is_new_side()).count();
        prop_assert_eq!(result.split.left.len(), old_side);
        prop_assert_eq!(result.split.right.len(), new_side);

        // Split views keep each side's own text
        prop_assert_eq!(contents(result.split.left.iter()), split_lines(&old));
        prop_assert_eq!(contents(result.split.right.iter()), split_lines(&new));

        for side in [&result.split.left, &result.split.right] {
            let numbers: Vec<usize> = side.iter().filter_map(Line::line_number).collect();
            let expected: Vec<usize> = (1..=side.len()).collect();
            prop_assert_eq!(numbers, expected);
        }
    }

    #[test]
    fn segments_cover_their_line(old in document(), new in document(), options in options()) {
        let result = compare(&old, &new, options).unwrap();

        for line in result.unified.iter().chain(&result.split.left).chain(&result.split.right) {
            if let Some(segments) = line.segments() {
                let text: String = segments.iter().map(|segment| segment.text.as_str()).collect();
                prop_assert_eq!(text.as_str(), line.content());
                let mut offset = 0;
                for segment in segments {
                    prop_assert_eq!(segment.start, offset);
                    offset = segment.end;
                }
            }
        }
    }

    #[test]
    fn moves_pair_symmetrically(old in document(), new in document()) {
        let options = DiffOptions::new().detect_moved(true);
        let result = compare(&old, &new, options).unwrap();

        let mut targets = std::collections::HashSet::new();
        let mut sources = std::collections::HashSet::new();
        for (index, line) in result.unified.iter().enumerate() {
            if line.kind() != LineKind::Moved {
                prop_assert!(line.move_link().is_none());
                continue;
            }
            match (line.moved_to(), line.moved_from()) {
                (Some(to), None) => {
                    prop_assert!(targets.insert(to));
                    prop_assert_eq!(result.unified[to].moved_from(), Some(index));
                    prop_assert_eq!(result.unified[to].content().trim(), line.content().trim());
                }
                (None, Some(from)) => {
                    prop_assert!(sources.insert(from));
                    prop_assert_eq!(result.unified[from].moved_to(), Some(index));
                }
                _ => prop_assert!(false, "moved line must carry exactly one link"),
            }
        }

        // Split links cross sides: left lines point right, right lines point left
        let mut right_partners = std::collections::HashSet::new();
        for (index, line) in result.split.left.iter().enumerate() {
            prop_assert!(line.moved_from().is_none());
            if let Some(to) = line.moved_to() {
                prop_assert_eq!(line.kind(), LineKind::Moved);
                prop_assert!(right_partners.insert(to));
                prop_assert_eq!(result.split.right[to].moved_from(), Some(index));
                prop_assert_eq!(result.split.right[to].content().trim(), line.content().trim());
            }
        }

        let mut left_partners = std::collections::HashSet::new();
        for (index, line) in result.split.right.iter().enumerate() {
            prop_assert!(line.moved_to().is_none());
            if let Some(from) = line.moved_from() {
                prop_assert_eq!(line.kind(), LineKind::Moved);
                prop_assert!(left_partners.insert(from));
                prop_assert_eq!(result.split.left[from].moved_to(), Some(index));
            }
        }
        prop_assert_eq!(left_partners.len(), right_partners.len());
    }

    #[test]
    fn comparison_is_deterministic(old in document(), new in document(), options in options()) {
        prop_assert_eq!(compare(&old, &new, options).unwrap(), compare(&old, &new, options).unwrap());
    }
}

//! Line grouping transform
//!
//! Splits the input into trimmed, non-empty lines and walks them in blocks of
//! `group_size`. Every line of a block except the last is paired with the
//! block's last line, each pair followed by an empty separator line.

use thiserror::Error;

/// Reasons the transform rejects its input. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingError {
    #[error("每组行数应大于1")]
    InvalidGroupSize(i64),

    #[error("每组行数应当可以整除总行数")]
    LineCountNotDivisible { lines: usize, group_size: usize },
}

/// Trimmed lines of `input`, blank ones dropped. Handles `\n` and `\r\n`.
pub fn non_empty_lines(input: &str) -> Vec<&str> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Regroup `input` into `(line, last)` pairs per block of `group_size` lines.
///
/// The output keeps the separator after the final pair, so a non-empty result
/// always ends with `\n`.
pub fn transform(input: &str, group_size: i64) -> Result<String, GroupingError> {
    if group_size <= 1 {
        return Err(GroupingError::InvalidGroupSize(group_size));
    }
    let m = usize::try_from(group_size).map_err(|_| GroupingError::InvalidGroupSize(group_size))?;

    let lines = non_empty_lines(input);
    if lines.len() % m != 0 {
        return Err(GroupingError::LineCountNotDivisible {
            lines: lines.len(),
            group_size: m,
        });
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() / m * (m - 1) * 3);
    for block in lines.chunks_exact(m) {
        let (last, rest) = match block.split_last() {
            Some(split) => split,
            None => continue,
        };
        for line in rest {
            out.push(line);
            out.push(last);
            out.push("");
        }
    }

    Ok(out.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_each_line_with_block_last() {
        assert_eq!(transform("a\nb\nc\nd", 2).unwrap(), "a\nb\n\nc\nd\n");
    }

    #[test]
    fn trims_and_skips_blank_lines() {
        let out = transform("  x \n\n y\n z \n w", 4).unwrap();
        assert_eq!(out, "x\nw\n\ny\nw\n\nz\nw\n");
    }

    #[test]
    fn crlf_matches_lf() {
        let lf = transform("1\n2\n3\n4\n5\n6", 3).unwrap();
        let crlf = transform("1\r\n2\r\n3\r\n4\r\n5\r\n6\r\n", 3).unwrap();
        assert_eq!(lf, crlf);
        assert_eq!(lf, "1\n3\n\n2\n3\n\n4\n6\n\n5\n6\n");
    }

    #[test]
    fn output_line_count_follows_block_shape() {
        for m in 2..=6usize {
            for blocks in 1..=4usize {
                let input: Vec<String> = (0..m * blocks).map(|i| i.to_string()).collect();
                let out = transform(&input.join("\n"), m as i64).unwrap();
                // Trailing separator leaves an empty final element after the split.
                let count = out.split('\n').count();
                assert_eq!(count, 3 * blocks * (m - 1), "m={m} blocks={blocks}");
            }
        }
    }

    #[test]
    fn last_line_is_never_a_leading_entry() {
        let out = transform("a\nb\nz", 3).unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines, vec!["a", "z", "", "b", "z", ""]);
    }

    #[test]
    fn consecutive_blank_lines_are_dropped() {
        let lines = non_empty_lines("\n\n  \t\nfoo\n\n\n\r\n   bar  \n\n");
        assert_eq!(lines, vec!["foo", "bar"]);
    }

    #[test]
    fn group_size_at_most_one_is_rejected() {
        for m in [1, 0, -3] {
            assert_eq!(transform("a\nb", m), Err(GroupingError::InvalidGroupSize(m)));
            assert_eq!(transform("", m), Err(GroupingError::InvalidGroupSize(m)));
        }
    }

    #[test]
    fn indivisible_line_count_is_rejected() {
        let err = transform("1\n2\n3\n4\n5", 2).unwrap_err();
        assert_eq!(
            err,
            GroupingError::LineCountNotDivisible { lines: 5, group_size: 2 }
        );
        assert_eq!(err.to_string(), "每组行数应当可以整除总行数");
    }

    #[test]
    fn blank_lines_do_not_count_towards_divisibility() {
        assert!(transform("1\n\n2\n\n\n3\n4\n   \n", 2).is_ok());
    }

    #[test]
    fn empty_input_with_valid_size_is_empty_output() {
        assert_eq!(transform("", 3).unwrap(), "");
        assert_eq!(transform(" \n \n", 2).unwrap(), "");
    }

    #[test]
    fn messages_match_display_text() {
        assert_eq!(GroupingError::InvalidGroupSize(1).to_string(), "每组行数应大于1");
    }
}

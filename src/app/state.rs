//! Field state behind the window and the three button actions

use crate::constants::MSG_ENTER_GROUP_SIZE;
use crate::grouping::{self, GroupingError};
use std::num::ParseIntError;
use thiserror::Error;

/// Why a generate action produced an error message instead of output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{}", MSG_ENTER_GROUP_SIZE)]
    InvalidNumber(#[from] ParseIntError),

    #[error(transparent)]
    Grouping(#[from] GroupingError),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratorState {
    pub input: String,
    pub output: String,
    pub group_size: String,
    /// Whether `output` currently holds an error message
    pub output_is_error: bool,
}

impl GeneratorState {
    /// Run the transform on the current fields and replace the output with the
    /// result or the error message.
    pub fn generate(&mut self) -> Result<(), GenerateError> {
        match self.try_generate() {
            Ok(text) => {
                self.output = text;
                self.output_is_error = false;
                Ok(())
            }
            Err(e) => {
                self.output = e.to_string();
                self.output_is_error = true;
                Err(e)
            }
        }
    }

    fn try_generate(&self) -> Result<String, GenerateError> {
        let m: i64 = self.group_size.trim().parse()?;
        Ok(grouping::transform(&self.input, m)?)
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.group_size.clear();
        self.output_is_error = false;
    }

    /// Text placed on the clipboard by the copy action, verbatim.
    pub fn clipboard_text(&self) -> &str {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(input: &str, group_size: &str) -> GeneratorState {
        GeneratorState {
            input: input.to_string(),
            group_size: group_size.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn generate_fills_output() {
        let mut s = state("a\nb\nc\nd", "2");
        assert!(s.generate().is_ok());
        assert_eq!(s.output, "a\nb\n\nc\nd\n");
        assert!(!s.output_is_error);
    }

    #[test]
    fn group_size_field_is_trimmed() {
        let mut s = state("a\nb", "  2 ");
        assert!(s.generate().is_ok());
        assert_eq!(s.output, "a\nb\n");
    }

    #[test]
    fn unparsable_group_size_shows_prompt() {
        for field in ["", "abc", "2.5", "二"] {
            let mut s = state("a\nb", field);
            s.output = "stale".into();
            let err = s.generate().unwrap_err();
            assert!(matches!(err, GenerateError::InvalidNumber(_)));
            assert_eq!(s.output, "请输入每组行数");
            assert!(s.output_is_error);
        }
    }

    #[test]
    fn domain_errors_replace_previous_output() {
        let mut s = state("a\nb\nc\nd", "2");
        s.generate().unwrap();

        s.group_size = "1".into();
        assert_eq!(
            s.generate(),
            Err(GenerateError::Grouping(GroupingError::InvalidGroupSize(1)))
        );
        assert_eq!(s.output, "每组行数应大于1");

        s.group_size = "-4".into();
        assert!(s.generate().is_err());
        assert_eq!(s.output, "每组行数应大于1");

        s.group_size = "3".into();
        assert!(s.generate().is_err());
        assert_eq!(s.output, "每组行数应当可以整除总行数");
    }

    #[test]
    fn success_after_error_clears_error_flag() {
        let mut s = state("a\nb", "x");
        let _ = s.generate();
        assert!(s.output_is_error);
        s.group_size = "2".into();
        s.generate().unwrap();
        assert!(!s.output_is_error);
    }

    #[test]
    fn clear_empties_every_field() {
        let mut s = state("1\n2", "2");
        s.generate().unwrap();
        s.clear();
        assert_eq!(s, GeneratorState::default());
        assert!(s.input.is_empty() && s.output.is_empty() && s.group_size.is_empty());
    }

    #[test]
    fn clipboard_text_is_output_verbatim() {
        let mut s = state("  x \n\n y\n z \n w", "4");
        s.generate().unwrap();
        assert_eq!(s.clipboard_text(), "x\nw\n\ny\nw\n\nz\nw\n");

        s.output = "  padded\n\n".into();
        assert_eq!(s.clipboard_text(), "  padded\n\n");
    }
}

use thiserror::Error;

/// Errors raised while resolving a pattern variant from a key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("No such {kind} exists: '{input}'\n  Expected one of: {}", .expected.join(", "))]
    UnknownVariant {
        kind: &'static str,
        input: String,
        expected: Vec<&'static str>,
    },
}

impl PatternError {
    pub fn unknown_variant(
        kind: &'static str,
        input: impl Into<String>,
        expected: Vec<&'static str>,
    ) -> Self {
        Self::UnknownVariant {
            kind,
            input: input.into(),
            expected,
        }
    }

    /// The key that failed to resolve.
    pub fn input(&self) -> &str {
        match self {
            Self::UnknownVariant { input, .. } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_display() {
        let error = PatternError::unknown_variant("strategy", "bogus", vec!["strategy1", "strategy2"]);
        let display = format!("{}", error);
        assert!(display.contains("strategy"));
        assert!(display.contains("'bogus'"));
        assert!(display.contains("strategy1, strategy2"));
    }

    #[test]
    fn test_input_accessor() {
        let error = PatternError::unknown_variant("factory", "Factory9", vec![]);
        assert_eq!(error.input(), "Factory9");
    }
}

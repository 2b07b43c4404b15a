use thiserror::Error;

/// Rejected selector input.
///
/// A transition that fails leaves the state untouched and emits no effects.
/// A recipe mismatch is not an error; see [`Outcome::Mismatched`].
///
/// [`Outcome::Mismatched`]: crate::selector::Outcome::Mismatched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selection step must be 1 or 2, got {0}")]
    InvalidStep(u8),

    #[error("cannot check a combination before both slots are filled")]
    IncompleteSelection,
}

#[cfg(test)]
mod tests {
    use super::SelectorError;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            SelectorError::InvalidStep(7).to_string(),
            "selection step must be 1 or 2, got 7"
        );
        assert!(
            SelectorError::IncompleteSelection
                .to_string()
                .contains("both slots")
        );
    }
}

use crate::app::domain::font_size::{FontSize, parse_size_input};

/// Owns what the numeric field shows.
///
/// The displayed text only changes on reconciliation. A rejected edit leaves
/// it alone, so whatever the user typed stays in the widget untouched.
pub struct SizeInputController {
    displayed: String,
}

impl SizeInputController {
    pub fn new(initial: FontSize) -> Self {
        Self {
            displayed: initial.to_string(),
        }
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Validation gate for a committed edit. Returns the candidate size,
    /// or `None` when the text is not a positive integer.
    pub fn candidate(&self, raw: &str) -> Option<FontSize> {
        let size = parse_size_input(raw);
        if size.is_none() {
            log::debug!("Ignoring font size input {:?}", raw);
        }
        size
    }

    pub(crate) fn reconcile(&mut self, size: FontSize) {
        self.displayed = size.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_display() {
        let input = SizeInputController::new(FontSize::DEFAULT);
        assert_eq!(input.displayed(), "12");
    }

    #[test]
    fn test_candidate_does_not_touch_display() {
        let input = SizeInputController::new(FontSize::DEFAULT);
        assert_eq!(input.candidate("30").map(FontSize::get), Some(30));
        assert_eq!(input.candidate("zero"), None);
        assert_eq!(input.displayed(), "12");
    }

    #[test]
    fn test_reconcile_uses_canonical_text() {
        let mut input = SizeInputController::new(FontSize::DEFAULT);
        let size = input.candidate(" 14.7 ").unwrap();
        input.reconcile(size);
        assert_eq!(input.displayed(), "14");
    }
}

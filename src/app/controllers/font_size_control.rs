use super::preset_list::{OverlayState, PresetListController};
use super::size_input::SizeInputController;
use crate::app::domain::font_size::FontSize;
use crate::app::domain::presets::PresetSizeList;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::EditorHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied(FontSize),
    Rejected,
}

/// Owns both input surfaces and the one operation that changes the size.
/// Neither surface writes to the other; only `apply_font_size` reconciles them.
pub struct FontSizeControl<H: EditorHost> {
    host: H,
    input: SizeInputController,
    presets: PresetListController,
}

impl<H: EditorHost> FontSizeControl<H> {
    pub fn new(host: H, presets: PresetSizeList, initial: FontSize) -> Self {
        Self {
            host,
            input: SizeInputController::new(initial),
            presets: PresetListController::new(presets, initial),
        }
    }

    /// A committed edit of the numeric field. Invalid text is dropped
    /// without touching the host or any displayed state.
    pub fn on_user_edit(&mut self, raw: &str) -> Result<EditOutcome> {
        match self.input.candidate(raw) {
            Some(size) => {
                self.apply_font_size(size)?;
                Ok(EditOutcome::Applied(size))
            }
            None => Ok(EditOutcome::Rejected),
        }
    }

    pub fn on_show_requested(&mut self) -> bool {
        self.presets.on_show_requested(&mut self.host)
    }

    /// Apply a clicked preset, then close the dropdown. If the host refuses
    /// the size the dropdown stays open.
    pub fn on_preset_clicked(&mut self, value: FontSize) -> Result<()> {
        let size = self.presets.candidate(value)?;
        self.apply_font_size(size)?;
        self.presets.hide(&mut self.host);
        Ok(())
    }

    /// Close without applying anything (click outside, Escape).
    pub fn on_overlay_dismissed(&mut self) -> bool {
        self.presets.hide(&mut self.host)
    }

    /// Send `size` to the host and, once it is accepted, make it the
    /// displayed value of both surfaces. Callers have already validated it.
    pub fn apply_font_size(&mut self, size: FontSize) -> Result<()> {
        if let Err(e) = self.host.apply_font_size_to_selection(size) {
            log::warn!("Font size {} was not applied: {}", size, e);
            return Err(e.into());
        }
        self.input.reconcile(size);
        self.presets.reconcile(size);
        log::debug!("Font size set to {}", size);
        Ok(())
    }

    pub fn displayed_text(&self) -> &str {
        self.input.displayed()
    }

    pub fn overlay(&self) -> OverlayState {
        self.presets.overlay()
    }

    pub fn selected_preset(&self) -> Option<usize> {
        self.presets.selected()
    }

    pub fn presets(&self) -> &PresetSizeList {
        self.presets.presets()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::{AppError, HostError};
    use crate::app::infrastructure::host::recording::{HostCall, RecordingHost};

    fn size(v: u32) -> FontSize {
        FontSize::new(v).unwrap()
    }

    fn control() -> FontSizeControl<RecordingHost> {
        FontSizeControl::new(RecordingHost::default(), PresetSizeList::default(), FontSize::DEFAULT)
    }

    #[test]
    fn test_invalid_edits_change_nothing() {
        let mut control = control();
        for raw in ["", "0", "-4", "abc", "1e2", "0.5"] {
            assert_eq!(control.on_user_edit(raw).unwrap(), EditOutcome::Rejected);
        }
        assert!(control.host().calls.is_empty());
        assert_eq!(control.displayed_text(), "12");
        assert_eq!(control.selected_preset(), Some(0));
    }

    #[test]
    fn test_valid_edit_applies_once_and_reconciles() {
        let mut control = control();
        for n in [1_u32, 13, 24, 96, 1000] {
            control.host_mut().calls.clear();
            let outcome = control.on_user_edit(&n.to_string()).unwrap();
            assert_eq!(outcome, EditOutcome::Applied(size(n)));
            assert_eq!(control.host().applied(), vec![n]);
            assert_eq!(control.displayed_text(), n.to_string());
        }
    }

    #[test]
    fn test_fractional_edit_is_truncated() {
        let mut control = control();
        control.on_user_edit("14.7").unwrap();
        assert_eq!(control.host().applied(), vec![14]);
        assert_eq!(control.displayed_text(), "14");
        assert_eq!(control.selected_preset(), Some(1));
    }

    #[test]
    fn test_edit_never_touches_overlay() {
        let mut control = control();
        control.on_show_requested();
        control.on_user_edit("20").unwrap();
        assert_eq!(control.overlay(), OverlayState::Visible);
        assert_eq!(
            control.host().calls,
            vec![HostCall::ShowOverlay, HostCall::Apply(size(20))]
        );
    }

    #[test]
    fn test_every_preset_click_applies_and_closes() {
        let mut control = control();
        let presets: Vec<FontSize> = control.presets().iter().collect();
        for preset in presets {
            control.host_mut().calls.clear();
            control.on_show_requested();
            control.on_preset_clicked(preset).unwrap();

            assert_eq!(control.host().applied(), vec![preset.get()]);
            assert_eq!(control.overlay(), OverlayState::Hidden);
            assert_eq!(control.displayed_text(), preset.to_string());
            assert_eq!(control.presets().position(preset), control.selected_preset());
        }
    }

    #[test]
    fn test_show_twice_stays_visible_without_applying() {
        let mut control = control();
        assert!(control.on_show_requested());
        assert!(!control.on_show_requested());
        assert_eq!(control.overlay(), OverlayState::Visible);
        assert!(control.host().applied().is_empty());
    }

    #[test]
    fn test_apply_round_trip_text() {
        let mut control = control();
        control.apply_font_size(size(18)).unwrap();
        assert_eq!(control.displayed_text(), "18");
    }

    #[test]
    fn test_custom_size_clears_preset_selection() {
        let mut control = control();
        control.apply_font_size(size(15)).unwrap();
        assert_eq!(control.selected_preset(), None);
        assert_eq!(control.presets().len(), 6);
    }

    #[test]
    fn test_dismiss_hides_without_applying() {
        let mut control = control();
        control.on_show_requested();
        assert!(control.on_overlay_dismissed());
        assert!(!control.on_overlay_dismissed());
        assert_eq!(control.overlay(), OverlayState::Hidden);
        assert!(control.host().applied().is_empty());
        assert_eq!(control.displayed_text(), "12");
    }

    #[test]
    fn test_unknown_preset_is_refused() {
        let mut control = control();
        control.on_show_requested();
        let err = control.on_preset_clicked(size(19)).unwrap_err();
        assert!(matches!(err, AppError::NotAPreset(_)));
        assert!(control.host().applied().is_empty());
        assert_eq!(control.overlay(), OverlayState::Visible);
    }

    #[test]
    fn test_host_failure_leaves_state_alone() {
        let mut control = FontSizeControl::new(
            RecordingHost::failing(HostError::NoSelection),
            PresetSizeList::default(),
            FontSize::DEFAULT,
        );

        let err = control.on_user_edit("30").unwrap_err();
        assert!(matches!(err, AppError::Host(HostError::NoSelection)));
        assert_eq!(control.displayed_text(), "12");

        control.on_show_requested();
        assert!(control.on_preset_clicked(size(16)).is_err());
        assert_eq!(control.overlay(), OverlayState::Visible);
        assert_eq!(control.displayed_text(), "12");
        assert_eq!(control.selected_preset(), Some(0));
        assert_eq!(control.host().applied(), vec![30, 16]);
    }

    #[test]
    fn test_scenario_reject_type_then_pick() {
        let mut control = control();

        assert_eq!(control.on_user_edit("0").unwrap(), EditOutcome::Rejected);
        assert!(control.host().calls.is_empty());

        control.on_user_edit("24").unwrap();
        assert_eq!(control.host().applied(), vec![24]);
        assert_eq!(control.displayed_text(), "24");

        control.on_show_requested();
        control.on_preset_clicked(size(16)).unwrap();
        assert_eq!(control.host().applied(), vec![24, 16]);
        assert_eq!(control.overlay(), OverlayState::Hidden);
        assert_eq!(control.displayed_text(), "16");
    }
}

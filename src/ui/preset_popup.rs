use fltk::{
    app::Sender,
    browser::HoldBrowser,
    button::Button,
    enums::CallbackTrigger,
    prelude::*,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::presets::PresetSizeList;

const POPUP_WIDTH: i32 = 60;
const ROW_HEIGHT: i32 = 20;

/// Borderless window listing the presets under the toolbar button.
/// Must be built after the main window has ended, so it is top-level.
#[derive(Clone)]
pub struct PresetPopup {
    window: Window,
    browser: HoldBrowser,
    anchor: Button,
    presets: PresetSizeList,
}

impl PresetPopup {
    pub fn new(presets: &PresetSizeList, sender: Sender<Message>, anchor: Button) -> Self {
        let height = ROW_HEIGHT * presets.len() as i32 + 4;
        let mut window = Window::default().with_size(POPUP_WIDTH, height);
        window.set_border(false);

        let mut browser = HoldBrowser::new(0, 0, POPUP_WIDTH, height, None);
        browser.set_text_size(13);
        window.end();

        let list = presets.clone();
        browser.set_trigger(CallbackTrigger::ReleaseAlways);
        browser.set_callback(move |b| {
            let line = b.value();
            if line > 0
                && let Some(size) = list.get((line - 1) as usize)
            {
                sender.send(Message::PresetClicked(size));
            }
        });

        // Escape or a window-manager close dismisses without choosing
        window.set_callback(move |_| sender.send(Message::PresetsDismissed));

        let mut popup = Self {
            window,
            browser,
            anchor,
            presets: presets.clone(),
        };
        popup.sync_selection(None);
        popup
    }

    pub fn show(&mut self) {
        let x = self.anchor.x();
        let y = self.anchor.y() + self.anchor.h();
        if let Some(parent) = self.anchor.window() {
            self.window.set_pos(parent.x() + x, parent.y() + y);
        }
        self.window.show();
    }

    pub fn hide(&mut self) {
        self.window.hide();
    }

    /// Highlight the entry at `selected`, or none.
    pub fn sync_selection(&mut self, selected: Option<usize>) {
        self.browser.clear();
        for size in self.presets.iter() {
            self.browser.add(&size.to_string());
        }
        if let Some(index) = selected {
            self.browser.select(index as i32 + 1);
        }
    }
}

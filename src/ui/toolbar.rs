use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger},
    frame::Frame,
    group::{Flex, FlexType},
    input::FloatInput,
    prelude::*,
};

use crate::app::domain::messages::Message;

pub const TOOLBAR_HEIGHT: i32 = 34;

/// Numeric size field plus the button that opens the preset dropdown.
pub struct SizeToolbar {
    pub row: Flex,
    input: FloatInput,
    button: Button,
}

impl SizeToolbar {
    pub fn new(sender: Sender<Message>, initial_text: &str) -> Self {
        let mut row = Flex::new(0, 0, 0, TOOLBAR_HEIGHT, None);
        row.set_type(FlexType::Row);
        row.set_margin(4);

        let label = Frame::default()
            .with_label("Size:")
            .with_align(Align::Right | Align::Inside);
        row.fixed(&label, 40);

        let mut input = FloatInput::default();
        input.set_value(initial_text);
        input.set_text_size(13);
        row.fixed(&input, 56);

        let mut button = Button::default().with_label("@-22>");
        button.set_tooltip("Font Size");
        row.fixed(&button, 26);

        // filler
        Frame::default();
        row.end();

        // Fire on Enter or when focus leaves with a changed value
        input.set_trigger(CallbackTrigger::EnterKey | CallbackTrigger::Release);
        input.set_callback(move |i| sender.send(Message::SizeEdited(i.value())));
        button.set_callback(move |_| sender.send(Message::ShowPresets));

        Self { row, input, button }
    }

    /// Rewrite the field. Only called after a size was applied.
    pub fn set_size_text(&mut self, text: &str) {
        self.input.set_value(text);
    }

    /// The button the dropdown opens under.
    pub fn anchor(&self) -> Button {
        self.button.clone()
    }
}

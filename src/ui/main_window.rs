use fltk::{
    app::Sender,
    group::{Flex, FlexType},
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::toolbar::{SizeToolbar, TOOLBAR_HEIGHT};
use crate::app::domain::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub toolbar: SizeToolbar,
    pub text_editor: TextEditor,
}

pub fn build_main_window(sender: Sender<Message>, initial_size_text: &str) -> MainWidgets {
    let mut wind = Window::new(100, 100, 640, 480, "Font Size - ferris-fontsize");
    wind.set_xclass("ferris-fontsize");

    let mut flex = Flex::new(0, 0, 640, 480, None);
    flex.set_type(FlexType::Column);

    let toolbar = SizeToolbar::new(sender, initial_size_text);
    flex.fixed(&toolbar.row, TOOLBAR_HEIGHT);

    let text_editor = TextEditor::new(0, 0, 0, 0, "");

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        toolbar,
        text_editor,
    }
}

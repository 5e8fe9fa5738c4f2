use fltk::{app, dialog, enums::Event, prelude::*};

use ferris_fontsize::app::{AppError, FontSizeConfig, FontSizePlugin, LocalEventBus, Message};
use ferris_fontsize::ui::editor_host::FltkEditorHost;
use ferris_fontsize::ui::main_window::build_main_window;
use ferris_fontsize::ui::preset_popup::PresetPopup;

fn main() {
    env_logger::init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let config = FontSizeConfig::load();
    let (presets, initial) = match (config.preset_list(), config.initial_font_size()) {
        (Ok(presets), Ok(initial)) => (presets, initial),
        (Err(e), _) | (_, Err(e)) => {
            dialog::alert_default(&format!("Invalid font size config: {}", e));
            return;
        }
    };

    let mut widgets = build_main_window(sender, &initial.to_string());
    widgets.wind.set_callback(|_| {
        if app::event() == Event::Close {
            app::quit();
        }
    });
    widgets.wind.show();

    let mut popup = PresetPopup::new(&presets, sender, widgets.toolbar.anchor());
    let host = FltkEditorHost::new(widgets.text_editor.clone(), popup.clone(), initial);

    let mut bus = LocalEventBus::new();
    let plugin = match FontSizePlugin::attach(host, &config, &mut bus) {
        Ok(plugin) => plugin,
        Err(e) => {
            dialog::alert_default(&format!("Failed to attach font size control: {}", e));
            return;
        }
    };
    if let Ok(control) = plugin.control() {
        popup.sync_selection(control.selected_preset());
    }

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        let resync_presets = msg.touches_preset_selection();
        match plugin.dispatch(msg, &mut bus) {
            Ok(Some(_)) => {
                if let Ok(control) = plugin.control() {
                    widgets.toolbar.set_size_text(control.displayed_text());
                    popup.sync_selection(control.selected_preset());
                }
            }
            Ok(None) => {}
            // Already logged by the control
            Err(AppError::Host(_)) => {}
            Err(e) => log::warn!("{}", e),
        }
        // A refused click leaves the browser highlighting the clicked row
        if resync_presets && let Ok(control) = plugin.control() {
            popup.sync_selection(control.selected_preset());
        }
    }
}

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use super::controllers::font_size_control::{EditOutcome, FontSizeControl};
use super::domain::font_size::FontSize;
use super::domain::messages::Message;
use super::domain::settings::FontSizeConfig;
use super::infrastructure::error::{AppError, Result};
use super::infrastructure::event_bus::EventBus;
use super::infrastructure::host::EditorHost;

/// The font size control attached to one editor instance.
///
/// Attaching registers the show event on the host's bus and subscribes the
/// preset dropdown to it. The control lives until `detach`.
pub struct FontSizePlugin<H: EditorHost + 'static> {
    control: Rc<RefCell<FontSizeControl<H>>>,
    command_name: String,
    show_event: String,
}

impl<H: EditorHost + 'static> FontSizePlugin<H> {
    pub fn attach(host: H, config: &FontSizeConfig, bus: &mut dyn EventBus) -> Result<Self> {
        config.validate()?;
        let control = Rc::new(RefCell::new(FontSizeControl::new(
            host,
            config.preset_list()?,
            config.initial_font_size()?,
        )));

        bus.register_event(&config.show_event)?;
        let listener = Rc::clone(&control);
        bus.on_event(
            &config.show_event,
            Box::new(move || match listener.try_borrow_mut() {
                Ok(mut control) => {
                    control.on_show_requested();
                }
                Err(_) => log::warn!("Show request ignored: font size control is busy"),
            }),
        )?;

        log::info!(
            "Font size control attached (command {:?}, event {:?})",
            config.command_name,
            config.show_event
        );
        Ok(Self {
            control,
            command_name: config.command_name.clone(),
            show_event: config.show_event.clone(),
        })
    }

    /// Tear the control down and hand the host back.
    pub fn detach(self, bus: &mut dyn EventBus) -> Result<H> {
        bus.remove_event(&self.show_event)?;
        let control = Rc::try_unwrap(self.control).map_err(|_| AppError::Busy)?;
        log::info!("Font size control detached");
        Ok(control.into_inner().into_host())
    }

    /// Run the named command with its single integer argument.
    pub fn exec(&self, command: &str, arg: i64) -> Result<()> {
        if command != self.command_name {
            return Err(AppError::UnknownCommand(command.to_string()));
        }
        let size = FontSize::try_from(arg)?;
        self.control_mut()?.apply_font_size(size)
    }

    /// Route one widget message. Returns the size that was applied, if any;
    /// only then does the numeric field need rewriting.
    pub fn dispatch(&self, message: Message, bus: &mut dyn EventBus) -> Result<Option<FontSize>> {
        match message {
            Message::SizeEdited(raw) => match self.control_mut()?.on_user_edit(&raw)? {
                EditOutcome::Applied(size) => Ok(Some(size)),
                EditOutcome::Rejected => Ok(None),
            },
            Message::ShowPresets => {
                bus.raise_event(&self.show_event)?;
                Ok(None)
            }
            Message::PresetClicked(size) => {
                self.control_mut()?.on_preset_clicked(size)?;
                Ok(Some(size))
            }
            Message::PresetsDismissed => {
                self.control_mut()?.on_overlay_dismissed();
                Ok(None)
            }
        }
    }

    pub fn control(&self) -> Result<Ref<'_, FontSizeControl<H>>> {
        self.control.try_borrow().map_err(|_| AppError::Busy)
    }

    fn control_mut(&self) -> Result<RefMut<'_, FontSizeControl<H>>> {
        self.control.try_borrow_mut().map_err(|_| AppError::Busy)
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn show_event(&self) -> &str {
        &self.show_event
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer state groups.
//!
//! The `App` struct owns the three independent state groups (transform,
//! page browser, info overlay), the desktop input adapters and localization.
//! It translates iced messages into controller calls; the controllers hold
//! every rule, this module only routes and renders.

mod input;
mod message;
mod subscription;
mod view;

pub use input::{DragInput, WheelInput, WheelMode};
pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::pages::PageCollection;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::animation::Curve;
use crate::ui::state::transform::{self, Effect};
use crate::ui::state::{InfoOverlayState, LongPress, PageBrowserState, TransformController};
use iced::keyboard::Modifiers;
use iced::{window, Element, Point, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Directory searched for page images when none is given on the command line.
const DEFAULT_PAGES_DIR: &str = "assets/pages";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    transform: TransformController,
    browser: PageBrowserState,
    overlay: InfoOverlayState,
    long_press: LongPress,
    drag: DragInput,
    wheel: WheelInput,
    modifiers: Modifiers,
    /// Last cursor position over the info icon.
    info_cursor: Point,
    /// Last user-facing error, shown under the info panel.
    notice: Option<Error>,
    pages_dir: PathBuf,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("transform", &self.transform.state())
            .field("page", &self.browser.selected_page_id())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 600;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Flags::default(), &Config::default())
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            log::warn!("Using default settings: {err}");
            Config::default()
        });

        (Self::with_config(&flags, &config), Task::none())
    }

    fn with_config(flags: &Flags, config: &Config) -> Self {
        let mut browser = PageBrowserState::new(PageCollection::bundled())
            .with_drawer_open(config.drawer_open.unwrap_or(false));
        let mut notice = None;
        if let Some(page) = flags.page {
            if let Err(err) = browser.select_page(page) {
                log::warn!("Ignoring start page: {err}");
                notice = Some(err.into());
            }
        }

        Self {
            i18n: I18n::new(flags.lang.clone(), config),
            transform: TransformController::new(),
            browser,
            overlay: InfoOverlayState::default(),
            long_press: LongPress::new(config.long_press()),
            drag: DragInput::default(),
            wheel: WheelInput::default(),
            modifiers: Modifiers::default(),
            info_cursor: Point::ORIGIN,
            notice,
            pages_dir: flags
                .pages_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PAGES_DIR)),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Transform(msg) => self.apply_transform(msg),
            Message::PointerPressed => self.drag.press(),
            Message::PointerMoved(position) => {
                if let Some(msg) = self.drag.moved(position) {
                    self.apply_transform(msg);
                }
            }
            Message::PointerReleased => {
                if let Some(msg) = self.drag.release() {
                    self.apply_transform(msg);
                }
            }
            Message::Wheel(delta) => {
                let mode = if self.modifiers.control() {
                    Some(WheelMode::Pinch)
                } else if self.modifiers.shift() {
                    Some(WheelMode::Rotate)
                } else {
                    None
                };
                if let Some(msg) =
                    mode.and_then(|mode| self.wheel.scroll(mode, delta, Instant::now()))
                {
                    self.apply_transform(msg);
                }
            }
            Message::ModifiersChanged(modifiers) => self.modifiers = modifiers,
            Message::InfoPressed => self.long_press.press(Instant::now(), self.info_cursor),
            Message::InfoMoved(position) => {
                self.info_cursor = position;
                self.long_press.moved(position);
            }
            Message::InfoReleased => self.long_press.release(),
            Message::ToggleDrawer => {
                let effect = self.browser.toggle_drawer();
                log::trace!("drawer toggled: {effect:?}");
            }
            Message::SelectPage(id) => match self.browser.select_page(id) {
                Ok(effect) => {
                    self.notice = None;
                    log::trace!("page shown: {effect:?}");
                }
                Err(err) => {
                    log::warn!("{err}");
                    self.notice = Some(err.into());
                }
            },
            Message::Tick(now) => {
                if let Some(msg) = self.wheel.tick(now) {
                    self.apply_transform(msg);
                }
                if self.long_press.poll(now) {
                    let curve = self.overlay.toggle_info_panel();
                    log::trace!("info panel toggled: {curve:?}");
                }
            }
        }
        Task::none()
    }

    fn apply_transform(&mut self, msg: transform::Message) {
        match self.transform.handle(msg) {
            Effect::Animate(curve) => animate(curve),
            Effect::None | Effect::Rejected(_) => {}
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.wheel.is_active() || self.long_press.is_pressed(),
            ),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            transform: &self.transform,
            browser: &self.browser,
            overlay: &self.overlay,
            notice: self.notice.as_ref(),
            pages_dir: &self.pages_dir,
        })
    }
}

/// The shell renders settled values directly; curves are only traced.
fn animate(curve: Curve) {
    log::trace!("transition: {curve:?}");
}

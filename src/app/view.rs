// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the page with its current transform plus three overlays: the
//! info panel (top), the zoom controls (bottom) and the thumbnail drawer
//! (top right).

use super::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::state::overlay::InfoReadout;
use crate::ui::state::transform::{self, TransformState};
use crate::ui::state::{InfoOverlayState, PageBrowserState, TransformController};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, mouse_area, Column, Container, Image, Row, Stack, Text};
use iced::{Color, Element, Length, Padding, Rotation};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub transform: &'a TransformController,
    pub browser: &'a PageBrowserState,
    pub overlay: &'a InfoOverlayState,
    pub notice: Option<&'a Error>,
    pub pages_dir: &'a Path,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Stack::new()
        .push(page_layer(&ctx))
        .push(info_layer(&ctx))
        .push(controls_layer(ctx.i18n))
        .push(drawer_layer(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn image_handle(pages_dir: &Path, name: &str) -> Handle {
    Handle::from_path(pages_dir.join(format!("{name}.png")))
}

/// Padding that shifts centered content by `offset`.
fn offset_padding(state: &TransformState) -> Padding {
    let dx = state.offset.x * 2.0;
    let dy = state.offset.y * 2.0;
    Padding {
        top: dy.max(0.0),
        right: (-dx).max(0.0),
        bottom: (-dy).max(0.0),
        left: dx.max(0.0),
    }
}

fn page_layer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.transform.state();
    let page = ctx.browser.current_page();
    let height = (sizing::PAGE_HEIGHT * state.scale).max(1.0);

    let image = Image::new(image_handle(ctx.pages_dir, &page.image_name))
        .height(Length::Fixed(height))
        .rotation(Rotation::Floating(state.angle));

    let framed = Container::new(image)
        .padding(offset_padding(&state))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::page);

    mouse_area(framed)
        .on_press(Message::PointerPressed)
        .on_move(Message::PointerMoved)
        .on_release(Message::PointerReleased)
        .on_exit(Message::PointerReleased)
        .on_double_click(Message::Transform(transform::Message::DoubleTap))
        .on_scroll(Message::Wheel)
        .into()
}

fn info_layer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let icon = mouse_area(
        Container::new(Text::new("◎").size(sizing::INFO_ICON))
            .width(Length::Fixed(sizing::INFO_ICON))
            .height(Length::Fixed(sizing::INFO_ICON)),
    )
    .on_press(Message::InfoPressed)
    .on_move(Message::InfoMoved)
    .on_release(Message::InfoReleased)
    .on_exit(Message::InfoReleased);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icon);

    if ctx.overlay.info_panel_visible {
        let readout = InfoOverlayState::readout(&ctx.transform.state());
        row = row.push(readout_panel(ctx.i18n, &readout));
    }

    let mut column = Column::new().spacing(spacing::XS).push(row);
    if let Some(err) = ctx.notice {
        column = column.push(
            Text::new(notice_text(ctx.i18n, err))
                .size(typography::FOOTNOTE)
                .color(Color::from_rgb(0.9, 0.3, 0.3)),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(Padding {
            top: spacing::XL,
            right: spacing::MD,
            bottom: 0.0,
            left: spacing::MD,
        })
        .align_x(Horizontal::Left)
        .align_y(Vertical::Top)
        .into()
}

fn readout_panel<'a>(i18n: &I18n, readout: &InfoReadout) -> Element<'a, Message> {
    let entries = [
        i18n.tr_with_args("info-scale", &[("value", readout.scale.as_str())]),
        i18n.tr_with_args("info-offset-x", &[("value", readout.offset_x.as_str())]),
        i18n.tr_with_args("info-offset-y", &[("value", readout.offset_y.as_str())]),
    ];

    let row = entries.into_iter().fold(
        Row::new().spacing(spacing::MD),
        |row, entry| row.push(Text::new(entry).size(typography::FOOTNOTE)),
    );

    Container::new(row)
        .padding(spacing::XS)
        .max_width(sizing::INFO_PANEL_MAX_WIDTH)
        .style(styles::container::glass)
        .into()
}

fn notice_text(i18n: &I18n, err: &Error) -> String {
    match err {
        Error::Selection(crate::domain::error::SelectionError::InvalidPageId(id)) => {
            i18n.tr_with_args(err.i18n_key(), &[("id", id.to_string().as_str())])
        }
        _ => i18n.tr(err.i18n_key()),
    }
}

fn controls_layer<'a>(i18n: &I18n) -> Element<'a, Message> {
    let control = |label: String, msg: transform::Message| {
        button(Text::new(label).size(typography::BODY))
            .height(Length::Fixed(sizing::CONTROL_ICON))
            .padding(spacing::XS)
            .on_press(Message::Transform(msg))
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .push(control(i18n.tr("control-scale-down"), transform::Message::StepDown))
        .push(control(i18n.tr("control-reset"), transform::Message::Reset))
        .push(control(i18n.tr("control-scale-up"), transform::Message::StepUp));

    let panel = Container::new(row)
        .padding(Padding {
            top: spacing::SM,
            right: spacing::LG,
            bottom: spacing::SM,
            left: spacing::LG,
        })
        .style(styles::container::glass);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: spacing::XL,
            left: 0.0,
        })
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}

fn drawer_layer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open = ctx.browser.is_drawer_open();
    let (glyph, hint) = if open {
        ("›", ctx.i18n.tr("drawer-close"))
    } else {
        ("‹", ctx.i18n.tr("drawer-open"))
    };

    let handle = mouse_area(
        Text::new(glyph)
            .size(sizing::DRAWER_HANDLE)
            .color(Color {
                a: opacity::SECONDARY,
                ..Color::WHITE
            }),
    )
    .on_press(Message::ToggleDrawer);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(handle);

    if open {
        for page in ctx.browser.pages().iter() {
            let thumbnail = Image::new(image_handle(ctx.pages_dir, &page.thumbnail_name()))
                .width(Length::Fixed(sizing::THUMBNAIL_WIDTH));
            row = row.push(
                button(thumbnail)
                    .padding(spacing::XXS)
                    .on_press(Message::SelectPage(page.id.get())),
            );
        }
    } else {
        row = row.push(Text::new(hint).size(typography::FOOTNOTE));
    }

    let panel = Container::new(row)
        .padding(Padding {
            top: spacing::MD,
            right: spacing::XS,
            bottom: spacing::MD,
            left: spacing::XS,
        })
        .max_width(sizing::DRAWER_WIDTH)
        .style(styles::container::glass);

    Container::new(panel)
        .width(Length::Fill)
        .padding(Padding {
            top: spacing::XL * 2.0,
            right: spacing::LG,
            bottom: 0.0,
            left: 0.0,
        })
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Vector;

    #[test]
    fn offset_padding_shifts_toward_offset() {
        let state = TransformState {
            offset: Vector::new(10.0, -5.0),
            ..TransformState::default()
        };
        let padding = offset_padding(&state);
        assert_eq!(padding.left, 20.0);
        assert_eq!(padding.right, 0.0);
        assert_eq!(padding.top, 0.0);
        assert_eq!(padding.bottom, 10.0);
    }

    #[test]
    fn centered_state_has_no_padding() {
        let padding = offset_padding(&TransformState::default());
        assert_eq!(padding, Padding::ZERO);
    }
}

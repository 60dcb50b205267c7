use iced::alignment::{Horizontal, Vertical};
use iced::border::{Border, Radius};
use iced::widget::{container, text};
use iced::{Background, Color, Element, Length, Shadow};

use crate::app::message::Message;
use crate::app::state::ToastKind;
use crate::app::theme::Palette;

use super::styles::with_alpha;

use super::super::desktop::FolioDesktop;

impl FolioDesktop {
    /// Transient toast pinned to the bottom-left corner, if one is live.
    pub(crate) fn status_toast(&self) -> Option<Element<'_, Message>> {
        let status = self.status.as_ref()?;
        let palette = self.palette;
        let tint = match status.kind {
            ToastKind::Info => palette.accent,
            ToastKind::Error => palette.danger,
        };

        let body = container(text(&status.message).size(13).color(tint))
            .padding([10, 16])
            .style(move |_| toast_style(palette, tint));

        Some(
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Bottom)
                .padding(24)
                .into(),
        )
    }
}

fn toast_style(palette: Palette, tint: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface_raised)),
        border: Border {
            color: with_alpha(tint, 0.45),
            width: 1.0,
            radius: Radius::from(10.0),
        },
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}

use iced::border::{Border, Radius};
use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Background, Element, Length, Shadow, Vector};

use crate::app::message::Message;
use crate::app::state::Section;
use crate::app::theme::Palette;

use super::styles::{ghost_button_style, primary_button_style, with_alpha};

use super::super::desktop::FolioDesktop;

impl FolioDesktop {
    pub(crate) fn topbar(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let scrolled = self.stage.scrolled();
        let profile = &self.stage.catalog().profile;

        let brand = button(text(&profile.name).size(16).color(palette.heading))
            .padding([6, 10])
            .on_press(Message::SectionRequested(Section::Hero))
            .style(move |_, status| ghost_button_style(palette, status));

        let mut links = row![].spacing(2).align_y(Alignment::Center);
        for section in &Section::ALL[1..] {
            links = links.push(
                button(
                    text(section.title())
                        .size(14)
                        .color(palette.text_secondary),
                )
                .padding([6, 12])
                .on_press(Message::SectionRequested(*section))
                .style(move |_, status| ghost_button_style(palette, status)),
            );
        }

        let resume_label = if self.exporting {
            "Saving…"
        } else {
            "Resume"
        };
        let resume = button(text(resume_label).size(14).color(palette.on_accent))
            .padding([8, 16])
            .on_press_maybe((!self.exporting).then_some(Message::ResumeRequested))
            .style(move |_, status| primary_button_style(palette, status));

        let bar = row![
            brand,
            Space::new().width(Length::Fill),
            links,
            Space::new().width(Length::Fixed(12.0)),
            resume,
        ]
        .spacing(4)
        .align_y(Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .padding([12, 24])
            .style(move |_| topbar_style(palette, scrolled))
            .into()
    }
}

fn topbar_style(palette: Palette, scrolled: bool) -> container::Style {
    // Past the scroll threshold the bar lifts off the page onto a raised
    // surface; at the top it blends into the background.
    if scrolled {
        container::Style {
            background: Some(Background::Color(palette.surface)),
            border: Border {
                color: with_alpha(palette.border, 0.6),
                width: 1.0,
                radius: Radius::from(0.0),
            },
            shadow: Shadow {
                color: with_alpha(iced::Color::BLACK, 0.25),
                offset: Vector::new(0.0, 3.0),
                blur_radius: 14.0,
            },
            ..container::Style::default()
        }
    } else {
        container::Style {
            background: Some(Background::Color(palette.background)),
            border: Border::default(),
            shadow: Shadow::default(),
            ..container::Style::default()
        }
    }
}

use iced::mouse::Cursor;
use iced::widget::canvas::{self, Frame, Geometry, Path, Program};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme};

use folio_core::DisplayAttrs;

use crate::app::message::Message;

use super::styles::with_alpha;

use super::super::desktop::FolioDesktop;

impl FolioDesktop {
    /// Cursor dot plus the eased follower ring, drawn over everything else.
    /// The layer ignores all events so clicks pass straight through it.
    pub(crate) fn pointer_trail(&self) -> Element<'_, Message> {
        canvas::Canvas::new(TrailLayer {
            attrs: *self.stage.attrs(),
            accent: self.palette.accent,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

struct TrailLayer {
    attrs: DisplayAttrs,
    accent: Color,
}

impl Program<Message> for TrailLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let follower = Point::new(self.attrs.follower.x, self.attrs.follower.y);
        frame.stroke(
            &Path::circle(follower, 14.0),
            canvas::Stroke::default()
                .with_color(with_alpha(self.accent, 0.75))
                .with_width(2.0),
        );
        frame.fill(&Path::circle(follower, 3.0), with_alpha(self.accent, 0.35));

        let cursor = Point::new(self.attrs.cursor.x, self.attrs.cursor.y);
        frame.fill(&Path::circle(cursor, 2.5), self.accent);

        vec![frame.into_geometry()]
    }
}

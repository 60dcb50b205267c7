//! Message definitions passed around the desktop update loop.

use std::path::PathBuf;
use std::result::Result;

use iced::keyboard::Event as KeyboardEvent;
use iced::widget::scrollable::Viewport;
use iced::{Point, Task};

use crate::app::state::Section;

#[derive(Debug, Clone)]
pub(crate) enum Message {
    ThemeMenuToggled,
    ThemeMenuDismissed,
    ThemeSelected(&'static str),
    PreviousHighlight,
    NextHighlight,
    HighlightRequested(usize),
    RotationTick,
    FrameTick,
    PointerMoved(Point),
    PageScrolled(Viewport),
    SectionRequested(Section),
    ResumeRequested,
    ResumeSaved(Result<PathBuf, String>),
    Keyboard(KeyboardEvent),
}

pub(crate) type Effect = Task<Message>;

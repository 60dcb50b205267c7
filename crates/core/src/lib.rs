pub mod carousel;
pub mod content;
pub mod cursor;
pub mod gate;
pub mod resume;
pub mod scroll;
pub mod stage;
pub mod theme;

pub use carousel::{Carousel, ROTATION_PERIOD};
pub use content::{Catalog, ContentError, Highlight, Profile, SkillGroup, Theme};
pub use cursor::{CursorTrail, Point, GLIDE_FACTOR, SETTLE_EPSILON};
pub use gate::FrameGate;
pub use scroll::{ScrollWatch, SCROLL_THRESHOLD};
pub use stage::{DisplayAttrs, Stage};
pub use theme::ThemePicker;

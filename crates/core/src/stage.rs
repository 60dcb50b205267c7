use crate::carousel::Carousel;
use crate::content::{Catalog, Highlight, Theme};
use crate::cursor::{CursorTrail, Point};
use crate::scroll::ScrollWatch;
use crate::theme::ThemePicker;

/// Values the stage publishes for styling layers: the active theme id plus
/// raw and eased cursor coordinates. `revision` bumps on every publish so
/// consumers can detect writes without comparing fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayAttrs {
    pub theme: &'static str,
    pub cursor: Point,
    pub follower: Point,
    pub revision: u64,
}

/// Root composition of the interactive page behaviors. Each machine owns its
/// state exclusively; the stage routes events to them, publishes display
/// attributes, and turns everything into a no-op once retired so stragglers
/// from timers and listeners cannot touch a torn-down page.
#[derive(Debug, Clone)]
pub struct Stage {
    catalog: &'static Catalog,
    picker: ThemePicker,
    scroll: ScrollWatch,
    carousel: Carousel,
    trail: CursorTrail,
    attrs: DisplayAttrs,
    retired: bool,
}

impl Stage {
    /// Compose a stage over the content pack. The boot theme is the catalog's
    /// first entry and is reflected in the initial display attributes.
    pub fn new(catalog: &'static Catalog) -> Self {
        let picker = ThemePicker::new(&catalog.themes);
        let attrs = DisplayAttrs {
            theme: picker.active().id.as_str(),
            cursor: Point::default(),
            follower: Point::default(),
            revision: 0,
        };
        Self {
            catalog,
            picker,
            scroll: ScrollWatch::new(),
            carousel: Carousel::new(catalog.highlights.len()),
            trail: CursorTrail::new(),
            attrs,
            retired: false,
        }
    }

    fn publish(&mut self) {
        self.attrs.revision = self.attrs.revision.wrapping_add(1);
    }

    pub fn toggle_theme_menu(&mut self) {
        if self.retired {
            return;
        }
        self.picker.toggle_menu();
    }

    /// Close the menu without changing the selection. Shells call this for
    /// Escape and for pointer-down outside the picker's region.
    pub fn dismiss_theme_menu(&mut self) {
        if self.retired {
            return;
        }
        self.picker.close_menu();
    }

    /// Select a theme by catalog id and close the menu. The id is published
    /// only when the selection actually changed; unknown ids are whole-call
    /// no-ops.
    pub fn select_theme(&mut self, id: &str) {
        if self.retired {
            return;
        }
        if let Some(theme) = self.picker.select(id) {
            if self.attrs.theme != theme.id {
                self.attrs.theme = theme.id.as_str();
                self.publish();
            }
        }
    }

    pub fn observe_scroll(&mut self, offset: f32) {
        if self.retired {
            return;
        }
        self.scroll.observe(offset);
    }

    pub fn rotation_tick(&mut self) {
        if self.retired {
            return;
        }
        self.carousel.advance();
    }

    pub fn next_highlight(&mut self) {
        if self.retired {
            return;
        }
        self.carousel.advance();
    }

    pub fn previous_highlight(&mut self) {
        if self.retired {
            return;
        }
        self.carousel.step_back();
    }

    pub fn show_highlight(&mut self, index: usize) {
        if self.retired {
            return;
        }
        self.carousel.jump_to(index);
    }

    /// Route a pointer move. The raw position is published immediately;
    /// returns true when this move armed a new animation run and the shell
    /// should start ticking.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        if self.retired {
            return false;
        }
        let started = self.trail.observe(x, y);
        self.attrs.cursor = self.trail.raw();
        self.publish();
        started
    }

    /// Run one animation step and publish both coordinate pairs. Returns
    /// true while the trail wants another step. Ticks that land on an idle
    /// trail publish nothing.
    pub fn animation_step(&mut self) -> bool {
        if self.retired || !self.trail.animating() {
            return false;
        }
        let again = self.trail.step();
        self.attrs.cursor = self.trail.raw();
        self.attrs.follower = self.trail.eased();
        self.publish();
        again
    }

    /// Tear the stage down: cancel the pending animation step and make every
    /// later event a no-op. Display attributes freeze at their final values.
    pub fn retire(&mut self) {
        self.trail.halt();
        self.retired = true;
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn themes(&self) -> &'static [Theme] {
        self.picker.themes()
    }

    pub fn active_theme(&self) -> &'static Theme {
        self.picker.active()
    }

    pub fn active_theme_index(&self) -> usize {
        self.picker.active_index()
    }

    pub fn theme_menu_open(&self) -> bool {
        self.picker.is_menu_open()
    }

    pub fn highlights(&self) -> &'static [Highlight] {
        &self.catalog.highlights
    }

    pub fn active_highlight(&self) -> &'static Highlight {
        &self.catalog.highlights[self.carousel.active()]
    }

    pub fn active_highlight_index(&self) -> usize {
        self.carousel.active()
    }

    pub fn scrolled(&self) -> bool {
        self.scroll.scrolled()
    }

    pub fn animating(&self) -> bool {
        self.trail.animating()
    }

    pub fn attrs(&self) -> &DisplayAttrs {
        &self.attrs
    }
}

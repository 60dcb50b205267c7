use crate::content::Theme;

/// Active visual theme plus the open state of its picker menu. Selection is
/// keyed by catalog id; unknown ids leave both the selection and the menu
/// untouched.
#[derive(Debug, Clone, Copy)]
pub struct ThemePicker {
    themes: &'static [Theme],
    active: usize,
    menu_open: bool,
}

impl ThemePicker {
    /// Picker over the given catalog, active on its first entry.
    pub fn new(themes: &'static [Theme]) -> Self {
        Self {
            themes,
            active: 0,
            menu_open: false,
        }
    }

    pub fn themes(&self) -> &'static [Theme] {
        self.themes
    }

    pub fn active(&self) -> &'static Theme {
        &self.themes[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Select the catalog entry matching `id` and close the menu. Returns the
    /// now-active theme, or None for unknown ids, which change nothing.
    pub fn select(&mut self, id: &str) -> Option<&'static Theme> {
        let index = self.themes.iter().position(|theme| theme.id == id)?;
        self.active = index;
        self.menu_open = false;
        Some(&self.themes[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn picker() -> ThemePicker {
        ThemePicker::new(&content::catalog().expect("content pack").themes)
    }

    #[test]
    fn boots_on_the_first_catalog_entry() {
        let picker = picker();
        assert_eq!(picker.active_index(), 0);
        assert_eq!(picker.active().id, "aurora");
        assert!(!picker.is_menu_open());
    }

    #[test]
    fn selecting_a_known_id_activates_it_and_closes_the_menu() {
        let mut picker = picker();
        picker.toggle_menu();

        let selected = picker.select("noir").expect("noir is in the catalog");
        assert_eq!(selected.id, "noir");
        assert_eq!(picker.active().id, "noir");
        assert!(!picker.is_menu_open());
    }

    #[test]
    fn unknown_ids_change_nothing() {
        let mut picker = picker();
        picker.toggle_menu();

        assert!(picker.select("solarized").is_none());
        assert_eq!(picker.active().id, "aurora");
        assert!(picker.is_menu_open(), "a failed selection keeps the menu up");
    }

    #[test]
    fn toggle_and_close_round_trip() {
        let mut picker = picker();
        picker.toggle_menu();
        assert!(picker.is_menu_open());
        picker.toggle_menu();
        assert!(!picker.is_menu_open());

        picker.toggle_menu();
        picker.close_menu();
        assert!(!picker.is_menu_open());
        picker.close_menu();
        assert!(!picker.is_menu_open());
    }
}

//! Configuration surfaces for tailoring the desktop shell at launch.

#[derive(Debug, Clone)]
pub struct DesktopOptions {
    pub start_maximized: bool,
    pub initial_theme: Option<String>,
}

impl Default for DesktopOptions {
    fn default() -> Self {
        Self {
            start_maximized: true,
            initial_theme: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct DesktopFlags {
    pub(crate) start_maximized: bool,
    pub(crate) initial_theme: Option<String>,
}

impl From<DesktopOptions> for DesktopFlags {
    fn from(options: DesktopOptions) -> Self {
        Self {
            start_maximized: options.start_maximized,
            initial_theme: options.initial_theme,
        }
    }
}

//! Shared state models that keep the desktop shell in sync with the stage.

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Section {
    Hero,
    Work,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub(crate) const ALL: &'static [Section] = &[
        Section::Hero,
        Section::Work,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Section::Hero => "Top",
            Section::Work => "Work",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Relative scroll offset of the section inside the page scrollable.
    pub(crate) fn anchor(self) -> f32 {
        match self {
            Section::Hero => 0.0,
            Section::Work => 0.26,
            Section::Projects => 0.55,
            Section::Skills => 0.78,
            Section::Contact => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StatusToast {
    pub(crate) message: String,
    pub(crate) kind: ToastKind,
    pub(crate) created_at: Instant,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ToastKind {
    Info,
    Error,
}

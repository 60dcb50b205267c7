//! Collects lightweight desktop telemetry so presentation tweaks can be validated during prototyping.

use parking_lot::Mutex;

#[derive(Debug, Clone)]
pub enum Event {
    AppStarted,
    ThemeChanged(String),
    HighlightRotated { index: usize },
    HighlightChosen { index: usize },
    SectionJumped(String),
    ExportRequested,
    ExportCompleted(String),
    ExportFailed { error: String },
}

pub struct Handle {
    #[cfg(feature = "telemetry")]
    events: Mutex<Vec<Event>>,
}

impl Handle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "telemetry")]
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, event: Event) {
        #[cfg(feature = "telemetry")]
        {
            match &event {
                Event::AppStarted => tracing::debug!("desktop telemetry app started"),
                Event::ThemeChanged(id) => {
                    tracing::debug!(theme = id.as_str(), "desktop telemetry theme changed")
                }
                Event::HighlightRotated { index } => {
                    tracing::debug!(index, "desktop telemetry highlight rotated")
                }
                Event::HighlightChosen { index } => {
                    tracing::debug!(index, "desktop telemetry highlight chosen")
                }
                Event::SectionJumped(section) => tracing::debug!(
                    section = section.as_str(),
                    "desktop telemetry section jumped"
                ),
                Event::ExportRequested => tracing::debug!("desktop telemetry export requested"),
                Event::ExportCompleted(path) => {
                    tracing::debug!(path = path.as_str(), "desktop telemetry export completed")
                }
                Event::ExportFailed { error } => {
                    tracing::debug!(error = %error, "desktop telemetry export failed")
                }
            }
            self.events.lock().push(event);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = event;
        }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        cfg!(feature = "telemetry")
    }

    #[cfg(test)]
    pub(crate) fn events_len(&self) -> usize {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().len()
        }
        #[cfg(not(feature = "telemetry"))]
        {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_event_counts_when_enabled() {
        let handle = Handle::new();
        handle.record(Event::ThemeChanged("noir".into()));
        if handle.is_enabled() {
            assert_eq!(handle.events_len(), 1);
        } else {
            assert_eq!(handle.events_len(), 0);
        }
    }
}

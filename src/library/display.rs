use crate::config::TrackLabelField;

use super::model::Track;

impl Track {
    /// `artist - title`, or just the title when the artist is blank.
    pub fn display(&self) -> String {
        match self.artist().trim() {
            "" => self.title().to_string(),
            a => format!("{} - {}", a, self.title()),
        }
    }

    /// Build a label for the track according to the provided `fields` and separator.
    ///
    /// Fields are emitted in the configured order; blank or missing metadata is
    /// skipped. Falls back to `title` when no parts were produced.
    pub fn label(&self, fields: &[TrackLabelField], sep: &str) -> String {
        let mut parts: Vec<String> = Vec::new();

        for f in fields {
            let part = match f {
                TrackLabelField::Title => Some(self.title().to_string()),
                TrackLabelField::Artist => Some(self.artist().to_string()),
                TrackLabelField::Album => self.album().map(str::to_string),
                TrackLabelField::Genre => self.genre().map(str::to_string),
                TrackLabelField::Year => self.year().map(|y| y.to_string()),
            };

            if let Some(p) = part.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                parts.push(p.to_string());
            }
        }

        if parts.is_empty() {
            self.title().to_string()
        } else {
            parts.join(sep)
        }
    }
}

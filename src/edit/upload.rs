//! Upload progress tracking
//!
//! The upload transport itself is an external collaborator; the core
//! only tracks progress and guarantees that a cancelled upload never
//! writes into block content. Completion after cancel yields nothing,
//! so there is no partial-write path.

/// State of one in-flight upload.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    InFlight,
    Cancelled,
    Completed(String),
    Failed(String),
}

/// Tracks one upload from start to final URL (or cancellation/failure).
#[derive(Debug, Clone)]
pub struct UploadTracker {
    progress: f32,
    state: UploadState,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            state: UploadState::InFlight,
        }
    }

    /// Completed fraction in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == UploadState::Cancelled
    }

    /// Record transport progress; ignored once the upload left flight.
    pub fn set_progress(&mut self, fraction: f32) {
        if self.state == UploadState::InFlight {
            self.progress = fraction.clamp(0.0, 1.0);
        }
    }

    /// Cancel mid-flight. Terminal states stay as they are.
    pub fn cancel(&mut self) {
        if self.state == UploadState::InFlight {
            self.state = UploadState::Cancelled;
        }
    }

    /// Record the final URL. Returns the URL to apply only when the
    /// upload is still live; a cancelled upload returns `None` and the
    /// caller must leave content untouched.
    pub fn complete(&mut self, url: impl Into<String>) -> Option<String> {
        if self.state != UploadState::InFlight {
            return None;
        }
        let url = url.into();
        self.progress = 1.0;
        self.state = UploadState::Completed(url.clone());
        Some(url)
    }

    /// Record a transport failure; surfaced to the user as retryable.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.state == UploadState::InFlight {
            self.state = UploadState::Failed(message.into());
        }
    }
}

impl Default for UploadTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamped() {
        let mut upload = UploadTracker::new();
        upload.set_progress(1.7);
        assert_eq!(upload.progress(), 1.0);
        upload.set_progress(-0.3);
        assert_eq!(upload.progress(), 0.0);
    }

    #[test]
    fn test_complete_returns_url_once() {
        let mut upload = UploadTracker::new();
        upload.set_progress(0.8);
        assert_eq!(
            upload.complete("https://cdn.example.com/v.mp4"),
            Some("https://cdn.example.com/v.mp4".to_string())
        );
        assert_eq!(upload.progress(), 1.0);
        // A second completion is a protocol error from the transport; ignored.
        assert_eq!(upload.complete("https://cdn.example.com/other.mp4"), None);
    }

    #[test]
    fn test_completion_after_cancel_yields_nothing() {
        let mut upload = UploadTracker::new();
        upload.cancel();
        assert!(upload.is_cancelled());
        assert_eq!(upload.complete("https://cdn.example.com/v.mp4"), None);
        assert!(upload.is_cancelled());
    }

    #[test]
    fn test_failure_is_terminal_and_retryable_state() {
        let mut upload = UploadTracker::new();
        upload.fail("connection reset");
        assert_eq!(
            upload.state(),
            &UploadState::Failed("connection reset".to_string())
        );
        upload.set_progress(0.5);
        assert_eq!(upload.progress(), 0.0);
    }
}

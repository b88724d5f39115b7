//! User-facing notifications.

use crate::logger;
use crate::utils::a11y;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
    /// Work in progress; replaced by whatever is printed next.
    Pending,
}

/// One notification, plus the text a screen reader would announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub announcement: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            announcement: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            announcement: None,
        }
    }

    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Pending,
            message: message.into(),
            announcement: Some(a11y::LOADING_STARTED.to_string()),
        }
    }

    /// Error notice; the announcement is derived from the message.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            level: NoticeLevel::Error,
            announcement: Some(a11y::error_occurred(&message)),
            message,
        }
    }

    pub fn announce(mut self, announcement: impl Into<String>) -> Self {
        self.announcement = Some(announcement.into());
        self
    }

    /// Print through the status line.
    pub fn print(&self) {
        match self.level {
            NoticeLevel::Success => logger::status_success(&self.message),
            NoticeLevel::Info => logger::status_info(&self.message),
            NoticeLevel::Error => logger::status_error(&self.message),
            NoticeLevel::Pending => logger::status_pending(&self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_announces() {
        let notice = Notice::error("boom");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.announcement.as_deref(), Some("Error occurred: boom"));
    }

    #[test]
    fn test_announce_override() {
        let notice = Notice::success("ok").announce("done");
        assert_eq!(notice.announcement.as_deref(), Some("done"));
        assert!(Notice::info("x").announcement.is_none());
    }

    #[test]
    fn test_pending_announces_loading() {
        let notice = Notice::pending("Fetching SVG from URL...");
        assert_eq!(notice.level, NoticeLevel::Pending);
        assert_eq!(notice.announcement.as_deref(), Some(a11y::LOADING_STARTED));
    }
}

//! Notification payloads passed from the state owner to the view.

/// Follow-up an action-bearing notification can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyAction {
    /// Flip the like flag back.
    ToggleLike,
    /// Flip the bookmark flag back.
    ToggleBookmark,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notify {
    /// Plain message with no button.
    TextMessage {
        /// Text shown.
        message: String,
    },
    /// Message with a button that runs `action`.
    ActionMessage {
        /// Text shown.
        message: String,
        /// Button caption.
        action_label: String,
        /// Dispatched when the button is pressed.
        action: NotifyAction,
    },
    /// Error with a button that may run `error_action`.
    ErrorMessage {
        /// Text shown.
        message: String,
        /// Button caption.
        error_label: String,
        /// Dispatched when the button is pressed, if any.
        error_action: Option<NotifyAction>,
    },
}

impl Notify {
    /// A [`Notify::TextMessage`].
    pub fn text(message: impl Into<String>) -> Self {
        Self::TextMessage {
            message: message.into(),
        }
    }

    /// A [`Notify::ActionMessage`].
    pub fn action(
        message: impl Into<String>,
        action_label: impl Into<String>,
        action: NotifyAction,
    ) -> Self {
        Self::ActionMessage {
            message: message.into(),
            action_label: action_label.into(),
            action,
        }
    }

    /// A [`Notify::ErrorMessage`].
    pub fn error(
        message: impl Into<String>,
        error_label: impl Into<String>,
        error_action: Option<NotifyAction>,
    ) -> Self {
        Self::ErrorMessage {
            message: message.into(),
            error_label: error_label.into(),
            error_action,
        }
    }

    /// Text shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::TextMessage { message }
            | Self::ActionMessage { message, .. }
            | Self::ErrorMessage { message, .. } => message,
        }
    }

    /// Label of the action button, if the notification has one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::TextMessage { .. } => None,
            Self::ActionMessage { action_label, .. } => Some(action_label),
            Self::ErrorMessage { error_label, .. } => Some(error_label),
        }
    }

    /// Action to dispatch when the button is pressed.
    pub fn follow_up(&self) -> Option<NotifyAction> {
        match self {
            Self::TextMessage { .. } => None,
            Self::ActionMessage { action, .. } => Some(*action),
            Self::ErrorMessage { error_action, .. } => *error_action,
        }
    }

    /// Whether this is an error notification.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::ErrorMessage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_message_has_no_button() {
        let notify = Notify::text("Saved");

        assert_eq!(notify.message(), "Saved");
        assert_eq!(notify.label(), None);
        assert_eq!(notify.follow_up(), None);
    }

    #[test]
    fn action_message_exposes_label_and_action() {
        let notify = Notify::action("Removed", "Undo", NotifyAction::ToggleBookmark);

        assert_eq!(notify.label(), Some("Undo"));
        assert_eq!(notify.follow_up(), Some(NotifyAction::ToggleBookmark));
    }

    #[test]
    fn error_message_may_have_label_without_action() {
        let notify = Notify::error("Failed", "OK", None);

        assert!(notify.is_error());
        assert_eq!(notify.label(), Some("OK"));
        assert_eq!(notify.follow_up(), None);
    }
}

//! Transient player-facing messages.

use smartstring::alias::String;
use std::fmt;
use std::time::Duration;

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Success => "success",
        })
    }
}

/// A message with its auto-clear deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    /// Clock time at which the message is hidden.
    pub expires_at: Duration,
}

impl Message {
    pub fn error(text: impl AsRef<str>, expires_at: Duration) -> Self {
        Self {
            text: text.as_ref().into(),
            severity: Severity::Error,
            expires_at,
        }
    }

    pub fn success(text: impl AsRef<str>, expires_at: Duration) -> Self {
        Self {
            text: text.as_ref().into(),
            severity: Severity::Success,
            expires_at,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        let e = Message::error("no", Duration::from_secs(3));
        assert_eq!(e.severity, Severity::Error);
        assert_eq!(e.to_string(), "[error] no");
        let s = Message::success("yes", Duration::ZERO);
        assert_eq!(s.severity, Severity::Success);
        assert_eq!(s.text.as_str(), "yes");
    }
}

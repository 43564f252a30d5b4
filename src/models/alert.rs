//! Advisory findings raised while validating and building a selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious an [`Alert`] is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The deployment as selected will fail or be unsafe.
    Error,
    /// Best-practice notice, e.g. no availability SLA.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// The kind of object an alert is attached to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    ResourceGroup,
    NetworkSecurityGroup,
    VirtualNetwork,
    LoadBalancer,
    NetworkInterface,
    StorageAccount,
    VirtualMachine,
    Disk,
}

/// Identity of the object that caused an alert.
///
/// Only used to correlate the alert back to the selection, e.g. in a review UI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject {
    pub kind: SubjectKind,
    pub name: String,
}

impl Subject {
    pub fn new(kind: SubjectKind, name: impl Into<String>) -> Subject {
        Subject {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}'", self.kind, self.name)
    }
}

/// One finding about the selection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
    pub subject: Subject,
}

impl Alert {
    pub fn error(message: impl Into<String>, subject: Subject) -> Alert {
        Alert {
            severity: Severity::Error,
            message: message.into(),
            subject,
        }
    }

    pub fn warning(message: impl Into<String>, subject: Subject) -> Alert {
        Alert {
            severity: Severity::Warning,
            message: message.into(),
            subject,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.severity, self.message, self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_display() {
        let alert = Alert::warning(
            "No availability set",
            Subject::new(SubjectKind::VirtualMachine, "vm01"),
        );
        assert_eq!(
            alert.to_string(),
            "Warning: No availability set [VirtualMachine 'vm01']"
        );
        assert!(!alert.is_error());
    }
}

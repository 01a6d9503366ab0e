use super::domain::ApplicationStatus;

/// How strictly the store checks a requested status change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Only `pending -> approved` and `pending -> rejected` are accepted.
    #[default]
    Guarded,
    /// Any status may overwrite any other, matching the legacy dashboard.
    Unguarded,
}

impl TransitionPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "guarded" | "strict" => Some(Self::Guarded),
            "unguarded" | "permissive" => Some(Self::Unguarded),
            _ => None,
        }
    }

    pub fn permits(self, from: ApplicationStatus, to: ApplicationStatus) -> bool {
        match self {
            TransitionPolicy::Guarded => from.can_transition_to(to),
            TransitionPolicy::Unguarded => true,
        }
    }
}

impl ApplicationStatus {
    /// Approved and rejected are final; pending moves to either of them once.
    pub const fn can_transition_to(self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (ApplicationStatus::Pending, ApplicationStatus::Approved)
                | (ApplicationStatus::Pending, ApplicationStatus::Rejected)
        )
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }
}

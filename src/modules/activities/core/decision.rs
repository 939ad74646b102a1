use crate::modules::activities::core::activity::Activity;

/// Display strings double as the `detail` clients receive.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DecideError {
    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error("Student not signed up")]
    NotSignedUp,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { activity: Activity },
    Rejected { reason: DecideError },
}

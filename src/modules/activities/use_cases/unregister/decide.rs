use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::use_cases::unregister::command::Unregister;

pub fn decide_unregister(activity: &Activity, command: &Unregister) -> Decision {
    if !activity.is_signed_up(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotSignedUp,
        };
    }
    let mut next = activity.clone();
    next.participants.retain(|p| *p != command.email);
    Decision::Accepted { activity: next }
}

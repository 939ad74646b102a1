use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::use_cases::sign_up::command::SignUp;

// max_participants is deliberately not checked here.
pub fn decide_sign_up(activity: &Activity, command: &SignUp) -> Decision {
    if activity.is_signed_up(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    let mut next = activity.clone();
    next.participants.push(command.email.clone());
    Decision::Accepted { activity: next }
}

use crate::modules::activities::application::decide_and_save::decide_and_save;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::ports::ActivityStore;
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::modules::activities::use_cases::sign_up::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: &SignUp) -> Result<Activity, ApplicationError> {
        let result = decide_and_save(&*self.store, &command.activity_name, |activity| {
            decide_sign_up(activity, command)
        })
        .await;

        match &result {
            Ok(_) => tracing::info!(
                activity_name = %command.activity_name,
                email = %command.email,
                "student signed up"
            ),
            Err(ApplicationError::Store(e)) => tracing::warn!(
                activity_name = %command.activity_name,
                error = %e,
                "sign up failed"
            ),
            Err(e) => tracing::debug!(
                activity_name = %command.activity_name,
                email = %command.email,
                reason = %e,
                "sign up rejected"
            ),
        }
        result
    }
}

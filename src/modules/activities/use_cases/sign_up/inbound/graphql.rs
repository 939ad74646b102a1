use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::adapters::inbound::graphql::application_error;
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up_for_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = SignUp::new(activity_name, email);
        state
            .sign_up_handler
            .handle(&command)
            .await
            .map_err(application_error)?;
        Ok(command.confirmation())
    }
}

use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::adapters::inbound::graphql::application_error;
use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister_from_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = Unregister::new(activity_name, email);
        state
            .unregister_handler
            .handle(&command)
            .await
            .map_err(application_error)?;
        Ok(command.confirmation())
    }
}

use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::adapters::inbound::graphql::query_error;
use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl GqlActivity {
    fn new(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let roster = state
            .queries
            .list_activities()
            .await
            .map_err(query_error)?;
        Ok(roster
            .iter()
            .map(|(name, activity)| GqlActivity::new(name, activity))
            .collect())
    }
}

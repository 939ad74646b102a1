use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::activities::use_cases::list_activities::inbound::graphql::QueryRoot;
use crate::modules::activities::use_cases::sign_up::inbound::graphql::SignUpMutation;
use crate::modules::activities::use_cases::unregister::inbound::graphql::UnregisterMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(MergedObject, Default)]
pub struct MutationRoot(SignUpMutation, UnregisterMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

use crate::modules::activities::adapters::inbound::http::INTERNAL_SERVER_ERROR_DETAIL;
use crate::modules::activities::application::errors::ApplicationError;

/// Domain and lookup failures keep their detail; store failures are logged and
/// reported as a generic error, the same way the HTTP surface does.
pub fn application_error(error: ApplicationError) -> async_graphql::Error {
    match error {
        ApplicationError::Store(e) => {
            tracing::warn!(error = %e, "activity store failed during mutation");
            async_graphql::Error::new(INTERNAL_SERVER_ERROR_DETAIL)
        }
        other => async_graphql::Error::new(other.to_string()),
    }
}

pub fn query_error(error: anyhow::Error) -> async_graphql::Error {
    tracing::warn!(error = %error, "listing activities failed");
    async_graphql::Error::new(INTERNAL_SERVER_ERROR_DETAIL)
}

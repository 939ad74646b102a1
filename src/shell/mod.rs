// Composition root for the activities bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Seed the in-memory store and wire it into the use case handlers.
// - Expose the HTTP and GraphQL routes.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

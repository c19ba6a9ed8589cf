// Composition root for the schedule service.
//
// Responsibilities
// - Read config from the environment.
// - Pick the schedule API backend: the bundled mock data set or the real HTTP API.
// - Wire the backend into use case handlers and expose them over REST and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

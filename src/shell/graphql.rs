use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::schedule::use_cases::get_tag_catalog::inbound::graphql::TagCatalogQuery;
use crate::modules::schedule::use_cases::get_weekly_plan::inbound::graphql::WeeklyPlanQuery;
use crate::modules::schedule::use_cases::list_available_weeks::inbound::graphql::AvailableWeeksQuery;
use crate::modules::schedule::use_cases::reload_metadata::inbound::graphql::ReloadMetadataMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AvailableWeeksQuery, WeeklyPlanQuery, TagCatalogQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ReloadMetadataMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}

use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::schedule::core::tag_key::{TagKey, TagKind};
use crate::modules::schedule::core::tag_meta::TagMeta;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTagMeta {
    pub key: String,
    pub id: u64,
    pub kind: String,
    pub label: String,
    pub color: String,
    pub tint: String,
    pub avatar: Option<String>,
    pub icon: Option<String>,
}

impl GqlTagMeta {
    fn new(key: TagKey, meta: TagMeta) -> Self {
        Self {
            key: key.to_string(),
            id: meta.id,
            kind: match meta.kind {
                TagKind::Member => "member".into(),
                TagKind::Type => "type".into(),
            },
            label: meta.label,
            color: meta.color,
            tint: meta.tint,
            avatar: meta.avatar,
            icon: meta.icon,
        }
    }
}

fn to_gql_error(e: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(e.to_string())
}

#[derive(Default)]
pub struct TagCatalogQuery;

#[Object]
impl TagCatalogQuery {
    /// Metadata for a tag key such as `member:5` or `type:3`.
    /// Unknown keys get the neutral fallback.
    async fn tag_meta(&self, context: &Context<'_>, key: String) -> GqlResult<GqlTagMeta> {
        let state = context.data_unchecked::<AppState>();
        let key: TagKey = key.parse().map_err(to_gql_error)?;
        let meta = state
            .tag_catalog_handler
            .tag_meta(key)
            .await
            .map_err(to_gql_error)?;
        Ok(GqlTagMeta::new(key, meta))
    }

    async fn member_tags(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTagMeta>> {
        let state = context.data_unchecked::<AppState>();
        let catalog = state.tag_catalog_handler.handle().await.map_err(to_gql_error)?;
        Ok(catalog
            .member_tags
            .iter()
            .map(|&key| GqlTagMeta::new(key, catalog.resolve(key)))
            .collect())
    }

    async fn type_tags(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTagMeta>> {
        let state = context.data_unchecked::<AppState>();
        let catalog = state.tag_catalog_handler.handle().await.map_err(to_gql_error)?;
        Ok(catalog
            .type_tags
            .iter()
            .map(|&key| GqlTagMeta::new(key, catalog.resolve(key)))
            .collect())
    }
}

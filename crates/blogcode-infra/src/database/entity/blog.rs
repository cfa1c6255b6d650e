//! Blog entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub cover_img: Option<String>,
    pub meta_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub meta_description: Option<String>,
    pub og_image: Option<String>,
    pub keywords: Option<Json>,
    pub tags: Option<Json>,
    pub schemas: Option<Json>,
    #[sea_orm(column_name = "schema")]
    pub schema_json: Option<Json>,
    pub faq_schema: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// JSON column holding a string array; anything else is treated as empty.
fn string_list(value: Option<Json>) -> Vec<String> {
    value
        .and_then(|v| serde_json::from_value::<Vec<String>>(v).ok())
        .unwrap_or_default()
}

/// JSON column holding a list of schema objects.
fn schema_list(value: Option<Json>) -> Option<Vec<Json>> {
    match value {
        Some(Json::Array(items)) => Some(items),
        _ => None,
    }
}

/// Conversion from SeaORM Model to the domain entity.
impl From<Model> for blogcode_core::domain::BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            title: model.title,
            content: model.content,
            cover_img: model.cover_img,
            meta_title: model.meta_title,
            meta_description: model.meta_description,
            og_image: model.og_image,
            keywords: string_list(model.keywords),
            tags: string_list(model.tags),
            schemas: schema_list(model.schemas),
            schema: model.schema_json,
            faq_schema: model.faq_schema,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        }
    }
}

/// Conversion from the related-posts projection.
impl From<Model> for blogcode_core::domain::RelatedPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug,
            title: model.title,
        }
    }
}

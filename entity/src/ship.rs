use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub nickname: Option<String>,
    pub registry: Option<String>,
    pub manufacturer: Option<String>,
    #[sea_orm(column_name = "model")]
    pub ship_model: Option<String>,
    #[sea_orm(column_name = "type")]
    pub ship_type: Option<String>,
    pub year_built: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub specs: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub history: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub callsign: Option<String>,
    pub role: Option<String>,
    pub species: Option<String>,
    pub homeworld: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub priority: i32,
    pub primary_ship_id: Option<i32>,
    pub primary_faction_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ship::Entity",
        from = "Column::PrimaryShipId",
        to = "super::ship::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PrimaryShip,
    #[sea_orm(
        belongs_to = "super::faction::Entity",
        from = "Column::PrimaryFactionId",
        to = "super::faction::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PrimaryFaction,
}

impl Related<super::ship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrimaryShip.def()
    }
}

impl Related<super::faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrimaryFaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

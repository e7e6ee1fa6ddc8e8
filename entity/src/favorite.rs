use sea_orm::entity::prelude::*;

/// Discriminator for which target column on a favorite row is active.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum FavoriteKind {
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "character")]
    Character,
}

/// Association row linking a user to a favorited character or planet.
///
/// Exactly one of `character_id` / `planet_id` is populated, matching
/// `favorite_kind`. The referential columns are logical only; the schema
/// declares no foreign key constraints, so rows may reference ids that do
/// not exist. `user_id` is nullable because requests without a `user_id`
/// body field are stored as-is.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub favorite_kind: FavoriteKind,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

/// Read-only planet reference data, seeded by migration.
///
/// `is_favorite` is a legacy column kept for schema compatibility; no
/// operation reads or writes it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub is_favorite: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

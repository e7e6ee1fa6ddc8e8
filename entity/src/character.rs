use sea_orm::entity::prelude::*;

/// Read-only character reference data, seeded by migration.
///
/// `is_favorite` is a legacy column kept for schema compatibility; no
/// operation reads or writes it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub gender: Option<String>,
    pub is_favorite: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

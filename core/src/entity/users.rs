use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub photo_url: Option<String>,
    pub role: String,
    #[sea_orm(column_type = "Text")]
    pub password_hash: String,
    pub password_changed_at: Option<DateTime>,
    pub password_reset_token: Option<String>,
    pub password_reset_expires: Option<DateTime>,
    pub active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub revision: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

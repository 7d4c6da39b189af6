use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_name = "image_link")]
    pub image_link: Option<String>,
    #[sea_orm(column_name = "facebook_link")]
    pub facebook_link: Option<String>,
    pub genres: Option<String>,
    #[sea_orm(column_name = "website_link")]
    pub website_link: Option<String>,
    /// Text column; see `domain::flags`.
    #[sea_orm(column_name = "seeking_talent")]
    pub seeking_talent: Option<String>,
    #[sea_orm(column_name = "seeking_description")]
    pub seeking_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shows::Entity")]
    Shows,
}

impl Related<super::shows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

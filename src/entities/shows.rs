use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    /// Canonical genre name, see `domain::Genre`
    pub genre: String,

    pub rating: Option<i32>,

    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_shows::Entity")]
    UserShows,
}

impl Related<super::user_shows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserShows.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_shows::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_shows::Relation::Show.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

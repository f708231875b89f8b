use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub username: String,

    /// Stored as given; there is no login flow to protect.
    pub password: String,
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

impl Related<super::shows::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_shows::Relation::Show.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_shows::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

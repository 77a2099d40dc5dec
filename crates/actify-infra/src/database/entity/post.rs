//! Volunteer post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use actify_core::domain::{PostDetails, VolunteerPost};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "volunteer_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub organizer_email: String,
    pub organizer_name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub location: String,
    pub volunteers_needed: i32,
    pub deadline: String,
    pub thumbnail: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain post.
impl From<Model> for VolunteerPost {
    fn from(model: Model) -> Self {
        VolunteerPost::with_id(
            model.id,
            PostDetails {
                organizer_email: model.organizer_email,
                organizer_name: model.organizer_name,
                title: model.title,
                description: model.description,
                category: model.category,
                location: model.location,
                volunteers_needed: model.volunteers_needed,
                deadline: model.deadline,
                thumbnail: model.thumbnail,
            },
        )
    }
}

/// Conversion from domain post to SeaORM ActiveModel.
impl From<VolunteerPost> for ActiveModel {
    fn from(post: VolunteerPost) -> Self {
        let details = post.details;
        Self {
            id: Set(post.id),
            organizer_email: Set(details.organizer_email),
            organizer_name: Set(details.organizer_name),
            title: Set(details.title),
            description: Set(details.description),
            category: Set(details.category),
            location: Set(details.location),
            volunteers_needed: Set(details.volunteers_needed),
            deadline: Set(details.deadline),
            thumbnail: Set(details.thumbnail),
        }
    }
}

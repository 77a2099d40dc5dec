//! Volunteer request entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use actify_core::domain::{RequestDetails, VolunteerRequest};

/// `post_id` is a plain column: requests and posts are deleted independently.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "volunteer_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    #[sea_orm(indexed)]
    pub volunteer_email: String,
    pub volunteer_name: String,
    #[sea_orm(column_type = "Text")]
    pub suggestion: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for VolunteerRequest {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            details: RequestDetails {
                post_id: model.post_id,
                volunteer_email: model.volunteer_email,
                volunteer_name: model.volunteer_name,
                suggestion: model.suggestion,
                status: model.status,
            },
        }
    }
}

impl From<VolunteerRequest> for ActiveModel {
    fn from(request: VolunteerRequest) -> Self {
        let details = request.details;
        Self {
            id: Set(request.id),
            post_id: Set(details.post_id),
            volunteer_email: Set(details.volunteer_email),
            volunteer_name: Set(details.volunteer_name),
            suggestion: Set(details.suggestion),
            status: Set(details.status),
        }
    }
}

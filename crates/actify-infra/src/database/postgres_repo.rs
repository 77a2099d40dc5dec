//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use actify_core::domain::{VolunteerPost, VolunteerRequest};
use actify_core::error::RepoError;
use actify_core::ports::{PostRepository, RequestRepository, UpsertOutcome};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::request::{self, Entity as RequestEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};
use crate::mask_email;

/// PostgreSQL volunteer post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL volunteer request repository.
pub type PostgresRequestRepository = PostgresBaseRepository<RequestEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_organizer(&self, email: &str) -> Result<Vec<VolunteerPost>, RepoError> {
        tracing::debug!(organizer = %mask_email(email), "Finding posts by organizer");

        let result = PostEntity::find()
            .filter(post::Column::OrganizerEmail.eq(email))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn upsert(&self, post: VolunteerPost) -> Result<UpsertOutcome, RepoError> {
        let id = post.id;
        let existed = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .is_some();

        let active_model: post::ActiveModel = post.into();
        PostEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(post::Column::Id)
                    .update_columns([
                        post::Column::OrganizerEmail,
                        post::Column::OrganizerName,
                        post::Column::Title,
                        post::Column::Description,
                        post::Column::Category,
                        post::Column::Location,
                        post::Column::VolunteersNeeded,
                        post::Column::Deadline,
                        post::Column::Thumbnail,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(if existed {
            UpsertOutcome::updated()
        } else {
            UpsertOutcome::inserted(id)
        })
    }

    async fn decrement_volunteers_needed(&self, id: Uuid) -> Result<u64, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(
                post::Column::VolunteersNeeded,
                Expr::col(post::Column::VolunteersNeeded).sub(1),
            )
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl RequestRepository for PostgresRequestRepository {
    async fn find_by_volunteer(&self, email: &str) -> Result<Vec<VolunteerRequest>, RepoError> {
        tracing::debug!(volunteer = %mask_email(email), "Finding requests by volunteer");

        let result = RequestEntity::find()
            .filter(request::Column::VolunteerEmail.eq(email))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

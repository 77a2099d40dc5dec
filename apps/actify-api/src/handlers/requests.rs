//! Volunteer request handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use actify_core::domain::{RequestDetails, VolunteerRequest};
use actify_core::ports::{BaseRepository, PostRepository, RequestRepository};
use actify_shared::ApiResponse;
use actify_shared::dto::{DeleteResult, InsertResult, UpdateResult};

use crate::middleware::error::AppResult;
use crate::middleware::ownership::{Owned, VolunteerEmail};
use crate::state::AppState;

/// GET /newVolunteer?volunteerEmail=
pub async fn list_by_volunteer(
    owner: Owned<VolunteerEmail>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let requests = state.requests.find_by_volunteer(&owner.owner_email).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(requests)))
}

/// POST /newVolunteer
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<RequestDetails>,
) -> AppResult<HttpResponse> {
    let request = state
        .requests
        .insert(VolunteerRequest::new(body.into_inner()))
        .await?;

    tracing::info!(
        volunteer_request = %request.id,
        post_id = %request.details.post_id,
        "Request created"
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok(InsertResult {
        inserted_id: request.id,
    })))
}

/// PUT /newVolunteer/{id} - one fewer volunteer needed on post `{id}`.
///
/// Clients call this after creating the request; the two writes are not
/// atomic together.
pub async fn decrement_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let matched = state
        .posts
        .decrement_volunteers_needed(path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UpdateResult {
        matched_count: matched,
        modified_count: matched,
        upserted_id: None,
    })))
}

/// DELETE /newVolunteer/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let deleted_count = state.requests.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(DeleteResult { deleted_count })))
}

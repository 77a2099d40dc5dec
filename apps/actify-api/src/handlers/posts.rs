//! Volunteer post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use actify_core::domain::{PostDetails, VolunteerPost};
use actify_core::ports::{BaseRepository, PostRepository};
use actify_infra::mask_email;
use actify_shared::ApiResponse;
use actify_shared::dto::{DeleteResult, InsertResult, UpdateResult};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::middleware::ownership::{OrganizerEmail, Owned};
use crate::state::AppState;

/// GET /needVolunteer - public listing of every post.
pub async fn list_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /volunteer/{id}
pub async fn get(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::maybe(post)))
}

/// GET /volunteers?organizerEmail=
pub async fn list_by_organizer(
    owner: Owned<OrganizerEmail>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.find_by_organizer(&owner.owner_email).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// POST /volunteers
///
/// The organizer email is taken from the body as sent, not from the token.
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<PostDetails>,
) -> AppResult<HttpResponse> {
    let post = state.posts.insert(VolunteerPost::new(body.into_inner())).await?;

    tracing::info!(
        post_id = %post.id,
        caller = %mask_email(&identity.email),
        "Post created"
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok(InsertResult {
        inserted_id: post.id,
    })))
}

/// PUT /volunteer/{id} - replace every field, inserting when absent.
pub async fn upsert(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostDetails>,
) -> AppResult<HttpResponse> {
    let post = VolunteerPost::with_id(path.into_inner(), body.into_inner());
    let outcome = state.posts.upsert(post).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(UpdateResult {
        matched_count: outcome.matched,
        modified_count: outcome.modified,
        upserted_id: outcome.upserted_id,
    })))
}

/// DELETE /volunteer/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let deleted_count = state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(DeleteResult { deleted_count })))
}

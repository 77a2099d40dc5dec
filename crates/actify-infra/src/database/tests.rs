#[cfg(test)]
mod tests {
    use crate::database::entity::{post, request};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresRequestRepository};
    use actify_core::domain::{VolunteerPost, VolunteerRequest};
    use actify_core::error::RepoError;
    use actify_core::ports::{BaseRepository, PostRepository, RequestRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn post_model(id: uuid::Uuid, organizer: &str, needed: i32) -> post::Model {
        post::Model {
            id,
            organizer_email: organizer.to_owned(),
            organizer_name: "Organizer".to_owned(),
            title: "Beach cleanup".to_owned(),
            description: "Bring gloves".to_owned(),
            category: "environment".to_owned(),
            location: "Dhaka".to_owned(),
            volunteers_needed: needed,
            deadline: "2026-11-01".to_owned(),
            thumbnail: "https://img.example/1.png".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(post_id, "a@x.com", 4)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<VolunteerPost> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.id, post_id);
        assert_eq!(post.details.title, "Beach cleanup");
        assert_eq!(post.details.volunteers_needed, 4);
    }

    #[tokio::test]
    async fn test_find_posts_by_organizer() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                post_model(uuid::Uuid::new_v4(), "a@x.com", 1),
                post_model(uuid::Uuid::new_v4(), "a@x.com", 2),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let posts = repo.find_by_organizer("a@x.com").await.unwrap();

        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.organizer_email() == "a@x.com"));
    }

    #[tokio::test]
    async fn test_decrement_reports_matched_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let matched = repo
            .decrement_volunteers_needed(uuid::Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(matched, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_request_reports_zero() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresRequestRepository::new(db);
        let deleted = BaseRepository::<VolunteerRequest, uuid::Uuid>::delete(&repo, uuid::Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(deleted, 0);
    }

    #[tokio::test]
    async fn test_find_requests_by_volunteer() {
        let post_id = uuid::Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![request::Model {
                id: uuid::Uuid::new_v4(),
                post_id,
                volunteer_email: "v@x.com".to_owned(),
                volunteer_name: "Val".to_owned(),
                suggestion: String::new(),
                status: "requested".to_owned(),
            }]])
            .into_connection();

        let repo = PostgresRequestRepository::new(db);
        let requests = repo.find_by_volunteer("v@x.com").await.unwrap();

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].details.post_id, post_id);
    }

    #[tokio::test]
    async fn test_query_failure_maps_to_repo_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "relation does not exist".to_owned(),
            ))])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result: Result<Vec<VolunteerPost>, RepoError> = repo.find_all().await;

        assert!(matches!(result, Err(RepoError::Query(_))));
    }
}

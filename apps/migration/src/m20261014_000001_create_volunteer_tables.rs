use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum VolunteerPosts {
    Table,
    Id,
    OrganizerEmail,
    OrganizerName,
    Title,
    Description,
    Category,
    Location,
    VolunteersNeeded,
    Deadline,
    Thumbnail,
}

#[derive(DeriveIden)]
enum VolunteerRequests {
    Table,
    Id,
    PostId,
    VolunteerEmail,
    VolunteerName,
    Suggestion,
    Status,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VolunteerPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VolunteerPosts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(VolunteerPosts::OrganizerEmail).string().not_null())
                    .col(ColumnDef::new(VolunteerPosts::OrganizerName).string().not_null())
                    .col(ColumnDef::new(VolunteerPosts::Title).string().not_null())
                    .col(ColumnDef::new(VolunteerPosts::Description).text().not_null())
                    .col(ColumnDef::new(VolunteerPosts::Category).string().not_null())
                    .col(ColumnDef::new(VolunteerPosts::Location).string().not_null())
                    .col(ColumnDef::new(VolunteerPosts::VolunteersNeeded).integer().not_null())
                    .col(ColumnDef::new(VolunteerPosts::Deadline).string().not_null())
                    .col(ColumnDef::new(VolunteerPosts::Thumbnail).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_volunteer_posts_organizer_email")
                    .table(VolunteerPosts::Table)
                    .col(VolunteerPosts::OrganizerEmail)
                    .to_owned(),
            )
            .await?;

        // No foreign key to volunteer_posts: deletes never cascade.
        manager
            .create_table(
                Table::create()
                    .table(VolunteerRequests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(VolunteerRequests::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(VolunteerRequests::PostId).uuid().not_null())
                    .col(ColumnDef::new(VolunteerRequests::VolunteerEmail).string().not_null())
                    .col(ColumnDef::new(VolunteerRequests::VolunteerName).string().not_null())
                    .col(ColumnDef::new(VolunteerRequests::Suggestion).text().not_null())
                    .col(ColumnDef::new(VolunteerRequests::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_volunteer_requests_volunteer_email")
                    .table(VolunteerRequests::Table)
                    .col(VolunteerRequests::VolunteerEmail)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VolunteerRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(VolunteerPosts::Table).to_owned())
            .await
    }
}

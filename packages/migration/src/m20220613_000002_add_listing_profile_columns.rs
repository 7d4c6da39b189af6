use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Venues {
    Table,
    Genres,
    WebsiteLink,
    SeekingTalent,
    SeekingDescription,
}

#[derive(Iden)]
enum Artists {
    Table,
    WebsiteLink,
    SeekingVenues,
    SeekingDescription,
}

// SQLite accepts a single alteration per ALTER TABLE statement, so every
// column gets its own statement on both backends.
async fn add_column<T: Iden + 'static>(
    manager: &SchemaManager<'_>,
    table: T,
    column: &mut ColumnDef,
) -> Result<(), DbErr> {
    manager
        .alter_table(
            Table::alter()
                .table(table)
                .add_column(column.null())
                .to_owned(),
        )
        .await
}

async fn drop_column<T: Iden + 'static, C: Iden + 'static>(
    manager: &SchemaManager<'_>,
    table: T,
    column: C,
) -> Result<(), DbErr> {
    manager
        .alter_table(Table::alter().table(table).drop_column(column).to_owned())
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        add_column(
            manager,
            Venues::Table,
            ColumnDef::new(Venues::Genres).string_len(120),
        )
        .await?;
        add_column(
            manager,
            Venues::Table,
            ColumnDef::new(Venues::WebsiteLink).string_len(120),
        )
        .await?;
        add_column(
            manager,
            Venues::Table,
            ColumnDef::new(Venues::SeekingTalent).string(),
        )
        .await?;
        add_column(
            manager,
            Venues::Table,
            ColumnDef::new(Venues::SeekingDescription).string_len(500),
        )
        .await?;

        add_column(
            manager,
            Artists::Table,
            ColumnDef::new(Artists::WebsiteLink).string_len(120),
        )
        .await?;
        add_column(
            manager,
            Artists::Table,
            ColumnDef::new(Artists::SeekingVenues).string_len(120),
        )
        .await?;
        add_column(
            manager,
            Artists::Table,
            ColumnDef::new(Artists::SeekingDescription).string_len(500),
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // reverse order of `up`
        drop_column(manager, Artists::Table, Artists::SeekingDescription).await?;
        drop_column(manager, Artists::Table, Artists::SeekingVenues).await?;
        drop_column(manager, Artists::Table, Artists::WebsiteLink).await?;

        drop_column(manager, Venues::Table, Venues::SeekingDescription).await?;
        drop_column(manager, Venues::Table, Venues::SeekingTalent).await?;
        drop_column(manager, Venues::Table, Venues::WebsiteLink).await?;
        drop_column(manager, Venues::Table, Venues::Genres).await
    }
}

use contracts::domain::a001_log_content::LogContentDto;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "log_contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub log_id: i64,
    #[sea_orm(column_type = "Text")]
    pub request_body: String,
    #[sea_orm(column_type = "Text")]
    pub response_body: String,
    /// unix timestamp, seconds
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogContentDto {
    fn from(m: Model) -> Self {
        LogContentDto {
            log_id: m.log_id,
            request_body: m.request_body,
            response_body: m.response_body,
        }
    }
}

pub async fn insert(
    db: &DatabaseConnection,
    log_id: i64,
    request_body: &str,
    response_body: &str,
    created_at: i64,
) -> Result<(), DbErr> {
    let active = ActiveModel {
        log_id: Set(log_id),
        request_body: Set(request_body.to_string()),
        response_body: Set(response_body.to_string()),
        created_at: Set(created_at),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}

pub async fn find_by_log_id(db: &DatabaseConnection, log_id: i64) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(log_id).one(db).await
}

pub async fn delete_by_log_id(db: &DatabaseConnection, log_id: i64) -> Result<u64, DbErr> {
    let result = Entity::delete_many()
        .filter(Column::LogId.eq(log_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Up to `limit` ids recorded before `target_timestamp`, oldest first
pub async fn find_ids_older_than(
    db: &DatabaseConnection,
    target_timestamp: i64,
    limit: u64,
) -> Result<Vec<i64>, DbErr> {
    Entity::find()
        .select_only()
        .column(Column::LogId)
        .filter(Column::CreatedAt.lt(target_timestamp))
        .order_by_asc(Column::CreatedAt)
        .limit(limit)
        .into_tuple::<i64>()
        .all(db)
        .await
}

pub async fn delete_by_log_ids(db: &DatabaseConnection, log_ids: &[i64]) -> Result<u64, DbErr> {
    let result = Entity::delete_many()
        .filter(Column::LogId.is_in(log_ids.iter().copied()))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

// src/shared/persistence.rs

use sea_orm::sea_query::Expr;
use sea_orm::{
    Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect, SqlErr,
};

use crate::shared::display_order::next_display_order;

/// `MAX(display_order) + 1` over the rows matched by `scope`, or 0 when the
/// scope is empty. Fails when the scope already ends at `i32::MAX`.
pub async fn next_display_order_in<E, C>(
    db: &C,
    column: E::Column,
    scope: Condition,
) -> Result<i32, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let max: Option<Option<i32>> = E::find()
        .select_only()
        .column_as(Expr::col(column).max(), "max_order")
        .filter(scope)
        .into_tuple()
        .one(db)
        .await?;

    next_display_order(max.flatten())
        .ok_or_else(|| DbErr::Custom("display_order range exhausted".to_string()))
}

pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("foreign key") || msg.contains("23503")
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505")
}

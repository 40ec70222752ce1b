use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_components, project_tech_stack, projects,
};
use crate::modules::reorder::application::ports::outgoing::{
    ReorderRepository, ReorderRepositoryError,
};
use crate::modules::reorder::domain::ReorderTarget;
use crate::modules::resume::adapter::outgoing::sea_orm_entity::{
    resume_entries, resume_entry_bullets, resume_sections,
};
use crate::shared::display_order::{parked_display_order, ReorderItem};
use crate::shared::persistence::is_unique_violation;

#[derive(Debug, Clone)]
pub struct ReorderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReorderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReorderRepository for ReorderRepositoryPostgres {
    async fn reorder(
        &self,
        target: ReorderTarget,
        items: &[ReorderItem],
    ) -> Result<(), ReorderRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match target {
            ReorderTarget::Sections => {
                rewrite::<resume_sections::Entity>(
                    &txn,
                    resume_sections::Column::Id,
                    resume_sections::Column::DisplayOrder,
                    items,
                )
                .await?
            }
            ReorderTarget::Entries => {
                rewrite::<resume_entries::Entity>(
                    &txn,
                    resume_entries::Column::Id,
                    resume_entries::Column::DisplayOrder,
                    items,
                )
                .await?
            }
            ReorderTarget::Bullets => {
                rewrite::<resume_entry_bullets::Entity>(
                    &txn,
                    resume_entry_bullets::Column::Id,
                    resume_entry_bullets::Column::DisplayOrder,
                    items,
                )
                .await?
            }
            ReorderTarget::Projects => {
                rewrite::<projects::Entity>(
                    &txn,
                    projects::Column::Id,
                    projects::Column::DisplayOrder,
                    items,
                )
                .await?
            }
            ReorderTarget::TechStack => {
                rewrite::<project_tech_stack::Entity>(
                    &txn,
                    project_tech_stack::Column::Id,
                    project_tech_stack::Column::DisplayOrder,
                    items,
                )
                .await?
            }
            ReorderTarget::Components => {
                rewrite::<project_components::Entity>(
                    &txn,
                    project_components::Column::Id,
                    project_components::Column::DisplayOrder,
                    items,
                )
                .await?
            }
        }

        txn.commit().await.map_err(map_db_err)
    }
}

/// Two passes inside `txn`: every row is first parked on a distinct negative
/// value, then moved to its target. The unique (parent, display_order) index
/// never sees two rows on the same value in between.
///
/// An early return drops `txn`, which rolls it back.
async fn rewrite<E>(
    txn: &DatabaseTransaction,
    id: E::Column,
    display_order: E::Column,
    items: &[ReorderItem],
) -> Result<(), ReorderRepositoryError>
where
    E: EntityTrait,
{
    for item in items {
        let moved = set_order::<E>(
            txn,
            id,
            display_order,
            item.id,
            parked_display_order(item.display_order),
        )
        .await?;

        if moved == 0 {
            warn!(id = item.id, "Reorder target row missing");
            return Err(ReorderRepositoryError::NotFound(item.id));
        }
    }

    for item in items {
        set_order::<E>(txn, id, display_order, item.id, item.display_order).await?;
    }

    Ok(())
}

async fn set_order<E>(
    txn: &DatabaseTransaction,
    id: E::Column,
    display_order: E::Column,
    row_id: i32,
    value: i32,
) -> Result<u64, ReorderRepositoryError>
where
    E: EntityTrait,
{
    let result = E::update_many()
        .col_expr(display_order, Expr::value(value))
        .filter(id.eq(row_id))
        .exec(txn)
        .await
        .map_err(map_db_err)?;

    Ok(result.rows_affected)
}

fn map_db_err(err: DbErr) -> ReorderRepositoryError {
    if is_unique_violation(&err) {
        return ReorderRepositoryError::Conflict(err.to_string());
    }
    ReorderRepositoryError::DatabaseError(err.to_string())
}

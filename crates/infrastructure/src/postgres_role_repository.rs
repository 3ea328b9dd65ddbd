use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use employee_application::{RoleCascadeOutcome, RoleRepository};
use employee_core::{AppError, AppResult};
use employee_domain::{EmployeeId, Role, RoleId};

/// PostgreSQL-backed repository for roles and the role-deletion cascade.
#[derive(Clone)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn role_exists(&self, role_id: RoleId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM roles WHERE id = $1)
            "#,
        )
        .bind(role_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to resolve role: {error}")))
    }

    async fn count_roles(&self) -> AppResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM roles
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to count roles: {error}")))?;

        u64::try_from(count)
            .map_err(|error| AppError::Internal(format!("invalid role count {count}: {error}")))
    }

    async fn insert_role(&self, role: Role) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO roles (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(role.id().as_i64())
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to insert role: {error}")))?;

        Ok(())
    }

    async fn delete_role_cascade(
        &self,
        role_id: RoleId,
        default_employee_id: EmployeeId,
    ) -> AppResult<RoleCascadeOutcome> {
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Internal(format!("failed to begin transaction: {error}"))
        })?;

        // Statements run at READ COMMITTED so each one sees every holder
        // committed before the role lock was granted.
        ensure_cascade_targets(&mut transaction, role_id, default_employee_id).await?;

        let reassigned = sqlx::query(
            r#"
            UPDATE projects
            SET employee_id = $2
            WHERE employee_id IN (
                SELECT id
                FROM employees
                WHERE role_id = $1
            )
            "#,
        )
        .bind(role_id.as_i64())
        .bind(default_employee_id.as_i64())
        .execute(&mut *transaction)
        .await
        .map_err(|error| AppError::Internal(format!("failed to reassign projects: {error}")))?;

        let deleted = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE role_id = $1
            "#,
        )
        .bind(role_id.as_i64())
        .execute(&mut *transaction)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to delete role employees: {error}"))
        })?;

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit transaction: {error}"))
        })?;

        Ok(RoleCascadeOutcome {
            deleted_employees: deleted.rows_affected(),
            reassigned_projects: reassigned.rows_affected(),
        })
    }
}

async fn ensure_cascade_targets(
    transaction: &mut Transaction<'_, Postgres>,
    role_id: RoleId,
    default_employee_id: EmployeeId,
) -> AppResult<()> {
    // Employee writes check the role foreign key with FOR KEY SHARE, which
    // conflicts with this lock, so no holder can be added until commit.
    let locked_role = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id
        FROM roles
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(role_id.as_i64())
    .fetch_optional(&mut **transaction)
    .await
    .map_err(|error| AppError::Internal(format!("failed to lock role: {error}")))?;

    if locked_role.is_none() {
        return Err(AppError::NotFound(format!(
            "Role not found with ID: {role_id}"
        )));
    }

    let default_role = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT role_id
        FROM employees
        WHERE id = $1
        "#,
    )
    .bind(default_employee_id.as_i64())
    .fetch_optional(&mut **transaction)
    .await
    .map_err(|error| AppError::Internal(format!("failed to resolve default employee: {error}")))?;

    match default_role.map(RoleId::new) {
        None => Err(AppError::InvalidInput(format!(
            "Default employee not found with ID: {default_employee_id}"
        ))),
        Some(default_role) if default_role == role_id => Err(AppError::InvalidInput(format!(
            "Default employee {default_employee_id} holds role {role_id} and would be deleted"
        ))),
        Some(_) => Ok(()),
    }
}

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use employee_application::{EmployeeRepository, SaveEmployeeInput};
use employee_core::{AppError, AppResult};
use employee_domain::{Employee, EmployeeId, FullName, RoleId};

/// PostgreSQL-backed repository for employee rows.
#[derive(Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: String,
    surname: String,
    role_id: i64,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(
            EmployeeId::new(row.id),
            FullName::new(row.first_name, row.surname),
            RoleId::new(row.role_id),
        )
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create_employee(&self, input: SaveEmployeeInput) -> AppResult<Employee> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (first_name, surname, role_id)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, surname, role_id
            "#,
        )
        .bind(input.name.first_name())
        .bind(input.name.surname())
        .bind(input.role_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to insert employee: {error}")))?;

        Ok(row.into())
    }

    async fn find_employee(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, first_name, surname, role_id
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find employee: {error}")))?;

        Ok(row.map(Employee::from))
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        input: SaveEmployeeInput,
    ) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employees
            SET first_name = $2, surname = $3, role_id = $4
            WHERE id = $1
            RETURNING id, first_name, surname, role_id
            "#,
        )
        .bind(id.as_i64())
        .bind(input.name.first_name())
        .bind(input.name.surname())
        .bind(input.role_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update employee: {error}")))?;

        Ok(row.map(Employee::from))
    }

    async fn delete_employee(&self, id: EmployeeId) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete employee: {error}")))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use employee_application::{EmployeeRepository, RoleRepository, SaveEmployeeInput};
    use employee_domain::{EmployeeId, FullName, Role, RoleId};
    use sqlx::PgPool;
    use sqlx::migrate::Migrator;
    use sqlx::postgres::PgPoolOptions;

    use super::PostgresEmployeeRepository;
    use crate::PostgresRoleRepository;

    static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

    async fn test_pool() -> Option<PgPool> {
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            return None;
        };

        let pool = match PgPoolOptions::new()
            .max_connections(2)
            .connect(database_url.as_str())
            .await
        {
            Ok(pool) => pool,
            Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
        };

        if let Err(error) = MIGRATOR.run(&pool).await {
            panic!("failed to run migrations for postgres employee tests: {error}");
        }

        let roles = PostgresRoleRepository::new(pool.clone());
        for role in Role::all() {
            assert!(roles.insert_role(*role).await.is_ok());
        }

        Some(pool)
    }

    #[tokio::test]
    async fn employee_lifecycle_round_trips_name_parts() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let repository = PostgresEmployeeRepository::new(pool);

        let created = repository
            .create_employee(SaveEmployeeInput {
                name: FullName::new("Grace", "Brewster Hopper"),
                role_id: RoleId::new(2),
            })
            .await;
        let Ok(created) = created else {
            panic!("insert failed: {created:?}");
        };
        assert_eq!(created.name(), &FullName::new("Grace", "Brewster Hopper"));

        let found = repository.find_employee(created.id()).await;
        assert_eq!(found, Ok(Some(created.clone())));

        let updated = repository
            .update_employee(
                created.id(),
                SaveEmployeeInput {
                    name: FullName::new("Grace", "Hopper"),
                    role_id: RoleId::new(1),
                },
            )
            .await;
        assert!(matches!(
            updated,
            Ok(Some(ref employee)) if employee.role_id() == RoleId::new(1)
        ));

        assert_eq!(repository.delete_employee(created.id()).await, Ok(true));
        assert_eq!(repository.delete_employee(created.id()).await, Ok(false));
        assert_eq!(repository.find_employee(created.id()).await, Ok(None));
    }

    #[tokio::test]
    async fn update_of_missing_row_returns_none() {
        let Some(pool) = test_pool().await else {
            return;
        };
        let repository = PostgresEmployeeRepository::new(pool);

        let updated = repository
            .update_employee(
                EmployeeId::new(i64::MAX),
                SaveEmployeeInput {
                    name: FullName::new("No", "Body"),
                    role_id: RoleId::new(2),
                },
            )
            .await;

        assert_eq!(updated, Ok(None));
    }
}

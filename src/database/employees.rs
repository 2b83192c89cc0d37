use sqlx::Row;

use crate::{api::middleware::error::ApiResult, database::Database, models::Employee};

impl Database {
    /// Insert a new employee
    pub async fn create_employee(&self, employee: &Employee) -> ApiResult<()> {
        sqlx::query("INSERT INTO employees (id, name) VALUES (?, ?)")
            .bind(&employee.id)
            .bind(&employee.name)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Get an employee by ID
    pub async fn get_employee(&self, id: &str) -> ApiResult<Option<Employee>> {
        let row = sqlx::query("SELECT id, name FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(row.map(|r| Employee {
            id: r.get("id"),
            name: r.get("name"),
        }))
    }

    /// Get all employees
    pub async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        let rows = sqlx::query("SELECT id, name FROM employees ORDER BY id ASC")
            .fetch_all(self.pool())
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| Employee {
                id: r.get("id"),
                name: r.get("name"),
            })
            .collect())
    }

    /// Seed a handful of demo crew members on an empty employees table.
    /// Returns the number of rows inserted.
    pub async fn seed_demo_employees(&self) -> ApiResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(self.pool())
            .await?;

        if count > 0 {
            return Ok(0);
        }

        let demo = [
            ("klm012345", "Amelia Vermeer"),
            ("klm023456", "Jules Fontaine"),
            ("klm034567", "Niels de Boer"),
        ];

        for (id, name) in demo {
            sqlx::query("INSERT INTO employees (id, name) VALUES (?, ?)")
                .bind(id)
                .bind(name)
                .execute(self.pool())
                .await?;
        }

        Ok(demo.len() as u64)
    }
}

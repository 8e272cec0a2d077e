use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee};
use sqlx::SqliteConnection;

pub const NOT_FOUND_MESSAGE: &str = "Employee not found";

fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

pub async fn create(conn: &mut SqliteConnection, employee: &NewEmployee) -> Result<Employee, AppError> {
    let created = sqlx::query_as::<_, Employee>(
        "INSERT INTO employees (name, age, department) VALUES (?, ?, ?) RETURNING id, name, age, department",
    )
    .bind(&employee.name)
    .bind(employee.age)
    .bind(&employee.department)
    .fetch_one(&mut *conn)
    .await?;

    log::debug!("Created employee {}", created.id);
    Ok(created)
}

pub async fn list(conn: &mut SqliteConnection, skip: i64, limit: i64) -> Result<Vec<Employee>, AppError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, age, department FROM employees ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(&mut *conn)
    .await?;

    Ok(employees)
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Employee, AppError> {
    sqlx::query_as::<_, Employee>("SELECT id, name, age, department FROM employees WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(not_found)
}

pub async fn update(conn: &mut SqliteConnection, id: i64, employee: &NewEmployee) -> Result<Employee, AppError> {
    let updated = sqlx::query_as::<_, Employee>(
        "UPDATE employees SET name = ?, age = ?, department = ? WHERE id = ? RETURNING id, name, age, department",
    )
    .bind(&employee.name)
    .bind(employee.age)
    .bind(&employee.department)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(not_found)?;

    log::debug!("Updated employee {}", id);
    Ok(updated)
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found());
    }

    log::debug!("Deleted employee {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;

    fn new_employee(name: &str, age: i64, department: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            age,
            department: department.to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_get_roundtrip() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let created = create(&mut conn, &new_employee("Ada", 30, "R&D")).await.unwrap();
        assert_eq!(created.id, 1);

        let loaded = get(&mut conn, created.id).await.unwrap();
        assert_eq!(loaded, created);
        assert_eq!(loaded.name, "Ada");
        assert_eq!(loaded.age, 30);
        assert_eq!(loaded.department, "R&D");
    }

    #[tokio::test]
    async fn ids_are_unique_and_not_reused() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let first = create(&mut conn, &new_employee("A", 20, "Ops")).await.unwrap();
        let second = create(&mut conn, &new_employee("B", 21, "Ops")).await.unwrap();
        assert_ne!(first.id, second.id);

        delete(&mut conn, second.id).await.unwrap();
        let third = create(&mut conn, &new_employee("C", 22, "Ops")).await.unwrap();
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn list_respects_skip_and_limit_in_id_order() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        for i in 0..5 {
            create(&mut conn, &new_employee(&format!("E{}", i), 20 + i, "Ops")).await.unwrap();
        }

        let all = list(&mut conn, 0, 100).await.unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let page = list(&mut conn, 1, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "E1");
        assert_eq!(page[1].name, "E2");

        assert!(list(&mut conn, 10, 5).await.unwrap().is_empty());
        assert!(list(&mut conn, 0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let created = create(&mut conn, &new_employee("Ada", 30, "R&D")).await.unwrap();
        let updated = update(&mut conn, created.id, &new_employee("Ada L.", 31, "Math"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ada L.");

        let loaded = get(&mut conn, created.id).await.unwrap();
        assert_eq!(loaded, updated);
    }

    #[tokio::test]
    async fn missing_id_yields_not_found() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        assert!(matches!(get(&mut conn, 42).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            update(&mut conn, 42, &new_employee("X", 1, "Y")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(delete(&mut conn, 42).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_permanent() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        let created = create(&mut conn, &new_employee("Ada", 30, "R&D")).await.unwrap();
        delete(&mut conn, created.id).await.unwrap();

        match get(&mut conn, created.id).await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, NOT_FOUND_MESSAGE),
            other => panic!("expected not found, got {:?}", other),
        }
        assert!(matches!(delete(&mut conn, created.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn dropped_transaction_rolls_back() {
        let pool = memory_pool().await;

        {
            let mut tx = pool.begin().await.unwrap();
            create(&mut tx, &new_employee("Ghost", 40, "None")).await.unwrap();
        }

        let mut conn = pool.acquire().await.unwrap();
        assert!(list(&mut conn, 0, 100).await.unwrap().is_empty());
    }
}

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;
use crate::db::employees;
use crate::errors::AppError;
use crate::models::employee::NewEmployee;
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate, Debug)]
pub struct EmployeeQueryParams {
    #[serde(default)]
    #[validate(range(min = 0))]
    skip: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 0))]
    limit: i64,
}

fn default_limit() -> i64 {
    100
}

pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut tx = pool.begin().await.map_err(AppError::from)?;
    let employee = employees::create(&mut tx, &new_employee).await?;
    tx.commit().await.map_err(AppError::from)?;

    log::info!("Employee {} created", employee.id);
    Ok(HttpResponse::Created().json(employee))
}

pub async fn get_employees(
    pool: web::Data<SqlitePool>,
    query: web::Query<EmployeeQueryParams>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*query)?;

    let mut conn = pool.acquire().await.map_err(AppError::from)?;
    let page = employees::list(&mut conn, query.skip, query.limit).await?;

    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut conn = pool.acquire().await.map_err(AppError::from)?;
    let employee = employees::get(&mut conn, employee_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    employee_id: web::Path<i64>,
    updates: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    // Dropping the transaction on the not-found path rolls it back.
    let mut tx = pool.begin().await.map_err(AppError::from)?;
    let employee = employees::update(&mut tx, employee_id.into_inner(), &updates).await?;
    tx.commit().await.map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    employee_id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee_id = employee_id.into_inner();

    let mut tx = pool.begin().await.map_err(AppError::from)?;
    employees::delete(&mut tx, employee_id).await?;
    tx.commit().await.map_err(AppError::from)?;

    log::info!("Employee {} deleted", employee_id);
    Ok(HttpResponse::Ok().json(json!({
        "detail": "Employee deleted successfully",
    })))
}

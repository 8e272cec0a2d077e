pub mod employee;

use actix_web::web;
use crate::utils::validation::{json_config, path_config, query_config};

/// Registers the employee routes. Trailing slashes are expected to be trimmed
/// by `NormalizePath` before routing.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(
            web::resource("/employees")
                .route(web::post().to(employee::create_employee))
                .route(web::get().to(employee::get_employees)),
        )
        .service(
            web::resource("/employees/{employee_id}")
                .route(web::get().to(employee::get_employee))
                .route(web::put().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employee)),
        );
}

//! `OpenAPI` documentation and Swagger UI configuration.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crewly_api_employees::error::ErrorBody;
use crewly_api_employees::handlers;
use crewly_api_employees::models::{
    CreateEmployeeRequest, CreateEmployeeResponse, EmployeeListResponse, EmployeeResponse,
    PaginationMeta, UpdateEmployeeRequest,
};
use crewly_core::Role;

/// Security scheme modifier for Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// `OpenAPI` documentation for the Crewly API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Crewly API",
        version = "0.1.0",
        description = "HR administration API: companies, employees and onboarding invitations"
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server")
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Employees", description = "Employee administration")
    ),
    paths(
        handlers::list::list_employees_handler,
        handlers::create::create_employee_handler,
        handlers::show::get_employee_handler,
        handlers::update::update_employee_handler,
        handlers::delete::delete_employee_handler,
        handlers::by_company::employees_by_company_handler,
    ),
    components(schemas(
        Role,
        ErrorBody,
        CreateEmployeeRequest,
        UpdateEmployeeRequest,
        EmployeeResponse,
        CreateEmployeeResponse,
        EmployeeListResponse,
        PaginationMeta,
    ))
)]
pub struct ApiDoc;

/// Swagger UI routes serving the generated document.
pub fn swagger_routes() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().expect("Should serialize to JSON");
        assert!(json.contains("Crewly API"));
        assert!(json.contains("/api/employees"));
    }

    #[test]
    fn test_openapi_contains_employee_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/employees"));
        assert!(doc.paths.paths.contains_key("/api/employees/{id}"));
        assert!(doc
            .paths
            .paths
            .contains_key("/api/employees/company/{company_id}"));
    }
}

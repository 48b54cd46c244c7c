//! HTTP handlers for employee administration.

pub mod by_company;
pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

pub use by_company::employees_by_company_handler;
pub use create::create_employee_handler;
pub use delete::delete_employee_handler;
pub use list::list_employees_handler;
pub use show::get_employee_handler;
pub use update::update_employee_handler;

//! Request and response models.

pub mod requests;
pub mod responses;

pub use requests::{
    CreateEmployeeRequest, DeleteEmployeeQuery, ListEmployeesQuery, UpdateEmployeeRequest,
};
pub use responses::{
    ApiResponse, CreateEmployeeResponse, EmployeeListResponse, EmployeeResponse, PaginationMeta,
};

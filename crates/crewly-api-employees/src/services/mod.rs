//! Services for employee administration.

pub mod email;
pub mod employee_service;
pub mod invitation_service;

pub use email::{EmailError, EmailSender, MockEmailSender, SentEmail, SmtpConfig, SmtpEmailSender};
pub use employee_service::EmployeeService;
pub use invitation_service::{generate_invitation_token, DispatchError, InvitationService};

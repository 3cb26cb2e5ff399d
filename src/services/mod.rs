pub mod admin_service;

pub use admin_service::{AdminAccountService, AdminDeleteError, DeletionOutcome};

pub mod delete_account;

// Re-export handler functions for use in routing
pub use delete_account::delete_account;

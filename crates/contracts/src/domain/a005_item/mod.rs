pub mod aggregate;
pub mod history;

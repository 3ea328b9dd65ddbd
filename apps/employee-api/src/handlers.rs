pub mod employees;
pub mod health;

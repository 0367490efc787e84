pub mod departments;
pub mod employees;
pub mod leaves;

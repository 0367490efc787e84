pub mod client;
mod departments;
mod employees;
mod leaves;
pub mod types;

pub use client::*;
pub use departments::DEPARTMENTS_PATH;
pub use employees::EMPLOYEES_PATH;
pub use leaves::LEAVES_PATH;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

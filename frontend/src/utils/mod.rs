pub mod cancel;
pub mod text;

pub mod check;
pub mod name;

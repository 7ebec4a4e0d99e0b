pub mod panels;
pub mod pie;

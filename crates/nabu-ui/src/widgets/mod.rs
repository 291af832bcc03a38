pub mod column;
pub mod container;
pub mod text;

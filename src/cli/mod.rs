pub mod compare;
pub mod courses;
pub mod text;

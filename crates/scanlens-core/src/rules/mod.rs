pub mod builtin;
pub mod grade;
pub mod scoring;

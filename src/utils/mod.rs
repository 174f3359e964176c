//! Small helpers shared by the report and progress code

pub mod string;

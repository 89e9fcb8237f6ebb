pub mod exercise;
pub mod form;
pub mod program;
pub mod records;
pub mod workout_log;

pub mod editing_session;
pub mod filter;
pub mod five_three_one;
pub mod generic_program;
pub mod output_formatter;
pub mod program_generator;
pub mod workout_log;

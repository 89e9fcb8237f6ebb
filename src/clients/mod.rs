pub mod memory;
pub mod models;
pub mod store;
pub mod supabase;

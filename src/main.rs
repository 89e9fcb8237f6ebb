use std::sync::Arc;

use coach_program_engine::api::{AppState, router};
use coach_program_engine::catalog::Catalog;
use coach_program_engine::clients::memory::MemoryStore;
use coach_program_engine::clients::store::{ProgramStore, WorkoutLogStore};
use coach_program_engine::clients::supabase::SupabaseClient;
use coach_program_engine::config::Config;
use coach_program_engine::services::program_generator::ProgramGenerator;
use coach_program_engine::services::workout_log::WorkoutLogService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    tracing::info!(exercise_count = catalog.len(), "catalog.loaded");

    let (programs, workout_logs): (Arc<dyn ProgramStore>, Arc<dyn WorkoutLogStore>) =
        match &config.supabase {
            Some(supabase) => {
                let client = Arc::new(SupabaseClient::new(supabase)?);
                tracing::info!(url = %supabase.url, "store.remote");
                let programs: Arc<dyn ProgramStore> = client.clone();
                let workout_logs: Arc<dyn WorkoutLogStore> = client;
                (programs, workout_logs)
            }
            None => {
                let store = Arc::new(MemoryStore::new());
                tracing::warn!("store.in_memory");
                let programs: Arc<dyn ProgramStore> = store.clone();
                let workout_logs: Arc<dyn WorkoutLogStore> = store;
                (programs, workout_logs)
            }
        };

    let state = AppState {
        generator: ProgramGenerator::new(Arc::new(catalog)),
        programs,
        workout_logs: WorkoutLogService::new(workout_logs),
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

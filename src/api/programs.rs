use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::{ApiError, AppState};
use crate::models::form::ProgramFormData;
use crate::models::program::Program;
use crate::models::records::ProgramRecord;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramRequest {
    pub user_id: String,
    pub form: ProgramFormData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: String,
}

fn generate(state: &AppState, form: &ProgramFormData) -> Result<Program, ApiError> {
    form.validate()?;

    let program = state.generator.generate(form);
    if program.is_error() {
        return Err(ApiError::Unprocessable(format!(
            "{}: {}",
            program.title, program.description
        )));
    }
    Ok(program)
}

pub async fn preview_program(
    State(state): State<AppState>,
    Json(form): Json<ProgramFormData>,
) -> Result<Json<Program>, ApiError> {
    generate(&state, &form).map(Json)
}

pub async fn create_program(
    State(state): State<AppState>,
    Json(request): Json<CreateProgramRequest>,
) -> Result<(StatusCode, Json<ProgramRecord>), ApiError> {
    let program = generate(&state, &request.form)?;
    let record = state
        .programs
        .insert_program(&ProgramRecord::new(request.user_id, program))
        .await?;

    tracing::info!(
        program_id = %record.id,
        user_id = %record.user_id,
        days_per_week = record.days_per_week,
        "program.stored"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_programs(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<ProgramRecord>>, ApiError> {
    Ok(Json(state.programs.list_programs(&query.user_id).await?))
}

pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ProgramRecord>, ApiError> {
    state
        .programs
        .get_program(&id, &query.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("program {} not found", id)))
}

#[cfg(test)]
mod tests {
    use axum::http::Method;
    use serde_json::json;

    use crate::api::tests::{call, test_router};

    use super::*;

    fn powerlifting_form() -> serde_json::Value {
        json!({
            "objective": "Powerlifting",
            "joursEntrainement": 4,
            "materiel": ["barbell", "rack", "bench"],
            "squat1RM": 150,
            "bench1RM": 100,
            "deadlift1RM": 100,
            "overheadPress1RM": 100
        })
    }

    #[tokio::test]
    async fn test_preview_generic_program() {
        let app = test_router();
        let (status, body) = call(
            &app,
            Method::POST,
            "/programs/preview",
            Some(json!({
                "objective": "Sèche / Perte de Gras",
                "split": "Push Pull Legs",
                "joursEntrainement": 3,
                "materiel": []
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is531"], false);
        assert_eq!(body["weeks"].as_array().unwrap().len(), 4);
        assert_eq!(body["weeks"][0]["days"][0]["exercises"][0]["reps"], "12-15");
    }

    #[tokio::test]
    async fn test_create_then_fetch_program() {
        let app = test_router();
        let (status, created) = call(
            &app,
            Method::POST,
            "/programs",
            Some(json!({ "userId": "user-1", "form": powerlifting_form() })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["duration_weeks"], 4);
        assert_eq!(created["days_per_week"], 4);
        let first = &created["program"]["weeks"][0]["days"][0]["exercises"][0];
        assert_eq!(first["kind"], "main-lift-set");
        assert_eq!(first["name"], "Back Squat");
        assert_eq!(first["setDetail"]["calculatedWeight"], 87.5);

        let id = created["id"].as_str().unwrap();
        let (status, fetched) =
            call(&app, Method::GET, &format!("/programs/{}?userId=user-1", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, _) =
            call(&app, Method::GET, &format!("/programs/{}?userId=user-2", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, list) = call(&app, Method::GET, "/programs?userId=user-1", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_one_rep_max_is_unprocessable_and_not_stored() {
        let app = test_router();
        let mut form = powerlifting_form();
        form["bench1RM"] = json!(0);

        let (status, body) = call(
            &app,
            Method::POST,
            "/programs",
            Some(json!({ "userId": "user-1", "form": form })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("one-rep max"));

        let (_, list) = call(&app, Method::GET, "/programs?userId=user-1", None).await;
        assert!(list.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_training_days_rejected() {
        let app = test_router();
        let (status, body) = call(
            &app,
            Method::POST,
            "/programs/preview",
            Some(json!({ "objective": "Prise de Masse", "joursEntrainement": 9 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("between 1 and 7"));
    }
}

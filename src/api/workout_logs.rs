use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, AppState};
use crate::models::workout_log::DayWorkoutDataState;
use crate::services::workout_log::SaveOutcome;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsQuery {
    pub user_id: String,
    pub week: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDayRequest {
    pub user_id: String,
    pub exercises: DayWorkoutDataState,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SaveDayResponse {
    pub saved: usize,
}

pub async fn get_logs(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<DayWorkoutDataState>, ApiError> {
    let logs = match (query.week, query.day) {
        (Some(week), Some(day)) => {
            state
                .workout_logs
                .load_day(&program_id, &query.user_id, week, day)
                .await?
        }
        (None, None) => state.workout_logs.load(&program_id, &query.user_id).await?,
        _ => {
            return Err(ApiError::BadRequest(
                "week and day must be given together".to_string(),
            ));
        }
    };

    Ok(Json(logs))
}

pub async fn save_day(
    State(state): State<AppState>,
    Path((program_id, week, day)): Path<(String, u32, u32)>,
    Json(request): Json<SaveDayRequest>,
) -> Result<Json<SaveDayResponse>, ApiError> {
    let record = state
        .programs
        .get_program(&program_id, &request.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("program {} not found", program_id)))?;

    if record.program.day(week, day).is_none() {
        return Err(ApiError::BadRequest(format!(
            "week {} day {} is not part of program {}",
            week, day, program_id
        )));
    }

    let outcome = state
        .workout_logs
        .save_day(&program_id, &request.user_id, week, day, &request.exercises)
        .await?;

    let saved = match outcome {
        SaveOutcome::NothingToSave => 0,
        SaveOutcome::Saved { rows } => rows,
    };
    Ok(Json(SaveDayResponse { saved }))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::api::tests::{call, test_router};

    async fn create_program(app: &axum::Router) -> String {
        let (status, created) = call(
            app,
            Method::POST,
            "/programs",
            Some(json!({
                "userId": "user-1",
                "form": {
                    "objective": "Prise de Masse",
                    "split": "Full Body",
                    "joursEntrainement": 3,
                    "materiel": ["dumbbells"]
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        created["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_save_and_load_day_over_http() {
        let app = test_router();
        let id = create_program(&app).await;

        let (status, body) = call(
            &app,
            Method::PUT,
            &format!("/programs/{}/logs/1/1", id),
            Some(json!({
                "userId": "user-1",
                "exercises": {
                    "Goblet Squat": {
                        "sets": [
                            { "set": 1, "weight": "24", "reps": "12" },
                            { "set": 2, "weight": "24", "reps": "10-11" },
                            { "set": 3, "weight": "", "reps": "" }
                        ],
                        "notes": "knees ok"
                    }
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "saved": 2 }));

        let (status, logs) = call(
            &app,
            Method::GET,
            &format!("/programs/{}/logs?userId=user-1&week=1&day=1", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            logs,
            json!({
                "Goblet Squat": {
                    "sets": [
                        { "set": 1, "weight": "24", "reps": "12" },
                        { "set": 2, "weight": "24", "reps": "10-11" }
                    ],
                    "notes": "knees ok"
                }
            })
        );

        let (_, all) = call(
            &app,
            Method::GET,
            &format!("/programs/{}/logs?userId=user-1", id),
            None,
        )
        .await;
        assert_eq!(all, logs);
    }

    #[tokio::test]
    async fn test_blank_day_saves_nothing() {
        let app = test_router();
        let id = create_program(&app).await;

        let (status, body) = call(
            &app,
            Method::PUT,
            &format!("/programs/{}/logs/2/3", id),
            Some(json!({
                "userId": "user-1",
                "exercises": { "Plank": { "sets": [{ "set": 1 }], "notes": "" } }
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "saved": 0 }));
    }

    #[tokio::test]
    async fn test_save_rejects_unknown_program_or_day() {
        let app = test_router();
        let id = create_program(&app).await;
        let body = json!({ "userId": "user-1", "exercises": {} });

        let (status, _) = call(
            &app,
            Method::PUT,
            "/programs/missing/logs/1/1",
            Some(body.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call(
            &app,
            Method::PUT,
            &format!("/programs/{}/logs/1/4", id),
            Some(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_week_without_day_rejected() {
        let app = test_router();
        let (status, _) = call(
            &app,
            Method::GET,
            "/programs/p/logs?userId=user-1&week=1",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

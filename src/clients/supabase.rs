use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::clients::models::requests::ReplaceWorkoutLogsRequest;
use crate::clients::store::{ProgramStore, StoreError, WorkoutLogStore};
use crate::config::SupabaseConfig;
use crate::models::records::ProgramRecord;
use crate::models::workout_log::{LogScope, WorkoutLogRow};

const PROGRAMS_ENDPOINT: &str = "/rest/v1/programs";
const WORKOUT_LOGS_ENDPOINT: &str = "/rest/v1/workout_logs";
const REPLACE_LOGS_RPC: &str = "/rest/v1/rpc/replace_workout_logs";
const LOG_ORDER: &str = "exercise_name.asc,set_number.asc";

/// PostgREST client for the hosted program and workout log tables.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base: Url,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> anyhow::Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            base: Url::parse(&config.url)?,
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Url, StoreError> {
        let mut url = self
            .base
            .join(endpoint)
            .map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<String, StoreError> {
        let response = self.authorized(request).send().await.inspect_err(|e| {
            tracing::error!(error = %e, operation, "store.request_failed");
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(status = %status, body = %body, operation, "store.request_rejected");
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(operation, "store.request_ok");
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        operation: &str,
    ) -> Result<T, StoreError> {
        let body = self.send(self.http.get(url), operation).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{}", value)
}

#[async_trait]
impl ProgramStore for SupabaseClient {
    async fn insert_program(&self, record: &ProgramRecord) -> Result<ProgramRecord, StoreError> {
        let url = self.url(PROGRAMS_ENDPOINT, &[])?;
        let json_body = serde_json::to_string(&[record])?;

        let request = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .body(json_body);

        let body = self.send(request, "programs.insert").await?;
        let inserted: Vec<ProgramRecord> = serde_json::from_str(&body)?;
        inserted
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("program {}", record.id)))
    }

    async fn get_program(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<ProgramRecord>, StoreError> {
        let url = self.url(
            PROGRAMS_ENDPOINT,
            &[
                ("select", "*".to_string()),
                ("id", eq(id)),
                ("user_id", eq(user_id)),
            ],
        )?;

        let records: Vec<ProgramRecord> = self.fetch(url, "programs.get").await?;
        Ok(records.into_iter().next())
    }

    async fn list_programs(&self, user_id: &str) -> Result<Vec<ProgramRecord>, StoreError> {
        let url = self.url(
            PROGRAMS_ENDPOINT,
            &[
                ("select", "*".to_string()),
                ("user_id", eq(user_id)),
                ("order", "created_at.desc".to_string()),
            ],
        )?;

        self.fetch(url, "programs.list").await
    }
}

#[async_trait]
impl WorkoutLogStore for SupabaseClient {
    async fn replace_day(&self, scope: &LogScope, rows: &[WorkoutLogRow]) -> Result<(), StoreError> {
        let url = self.url(REPLACE_LOGS_RPC, &[])?;
        let json_body = serde_json::to_string(&ReplaceWorkoutLogsRequest::new(scope, rows))?;

        tracing::debug!(
            program_id = %scope.program_id,
            week = scope.week,
            day = scope.day,
            row_count = rows.len(),
            "store.replace_day.request"
        );

        let request = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .body(json_body);

        self.send(request, "workout_logs.replace_day").await?;
        Ok(())
    }

    async fn list_logs(
        &self,
        user_id: &str,
        program_id: &str,
    ) -> Result<Vec<WorkoutLogRow>, StoreError> {
        let url = self.url(
            WORKOUT_LOGS_ENDPOINT,
            &[
                ("select", "*".to_string()),
                ("user_id", eq(user_id)),
                ("program_id", eq(program_id)),
                ("order", LOG_ORDER.to_string()),
            ],
        )?;

        self.fetch(url, "workout_logs.list").await
    }

    async fn list_day_logs(&self, scope: &LogScope) -> Result<Vec<WorkoutLogRow>, StoreError> {
        let url = self.url(
            WORKOUT_LOGS_ENDPOINT,
            &[
                ("select", "*".to_string()),
                ("user_id", eq(&scope.user_id)),
                ("program_id", eq(&scope.program_id)),
                ("week", eq(scope.week)),
                ("day", eq(scope.day)),
                ("order", LOG_ORDER.to_string()),
            ],
        )?;

        self.fetch(url, "workout_logs.list_day").await
    }
}

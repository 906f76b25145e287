use crate::base::{APIError, APIResponse, BaseClient};
use clinic_scheduler_api_structs::*;
use clinic_scheduler_domain::date::weekday_index;
use clinic_scheduler_domain::{
    QuickCreateError, QuickSchedulePlan, ScheduleOwner, ShiftTime, Weekday, WorkSchedule,
    WorkScheduleDraft, ID,
};
use futures::future::join_all;
use reqwest::StatusCode;
use std::convert::TryFrom;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone)]
pub struct WorkScheduleClient {
    base: Arc<BaseClient>,
}

pub struct CreateWorkScheduleInput {
    pub owner: ScheduleOwner,
    pub day_of_week: Weekday,
    pub shift_start: ShiftTime,
    pub shift_end: ShiftTime,
    pub note: Option<String>,
}

pub struct UpdateWorkScheduleInput {
    pub schedule_id: ID,
    pub day_of_week: Option<Weekday>,
    pub shift_start: Option<ShiftTime>,
    pub shift_end: Option<ShiftTime>,
    pub note: Option<String>,
}

/// One draft of a quick-create batch that the backend refused.
#[derive(Debug)]
pub struct QuickCreateFailure {
    pub draft: WorkScheduleDraft,
    pub error: APIError,
}

/// Outcome of a fully successful quick-create batch: the records that
/// were created and the owner's reloaded schedule list.
#[derive(Debug)]
pub struct QuickCreateReport {
    pub created: Vec<WorkSchedule>,
    pub schedules: Vec<WorkSchedule>,
}

#[derive(Error, Debug)]
pub enum QuickCreateBatchError {
    /// The plan failed validation, nothing was sent.
    #[error(transparent)]
    Invalid(#[from] QuickCreateError),
    /// Some creations succeeded and some failed. The succeeded ones are
    /// not rolled back, the itemized breakdown tells the caller exactly
    /// what the backend now holds.
    #[error("{} of {} schedules could not be created", failed.len(), created.len() + failed.len())]
    Partial {
        created: Vec<WorkSchedule>,
        failed: Vec<QuickCreateFailure>,
    },
    #[error(transparent)]
    Api(#[from] APIError),
}

impl WorkScheduleClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_for_owner(&self, owner: &ScheduleOwner) -> APIResponse<Vec<WorkSchedule>> {
        let path = match owner {
            ScheduleOwner::Doctor(id) => format!("work-schedules/doctor/{}", id),
            ScheduleOwner::LabNurse(id) => format!("work-schedules/nurse/{}", id),
        };
        let dtos: get_work_schedules::APIResponse = self.base.get(path, StatusCode::OK).await?;
        dtos.into_iter()
            .map(|dto| WorkSchedule::try_from(dto).map_err(APIError::malformed))
            .collect()
    }

    pub async fn create(&self, input: CreateWorkScheduleInput) -> APIResponse<WorkSchedule> {
        let draft = WorkScheduleDraft::new(
            input.owner,
            input.day_of_week,
            input.shift_start,
            input.shift_end,
            input.note,
        )
        .map_err(APIError::bad_client_data)?;
        self.create_draft(&draft).await
    }

    pub async fn update(&self, input: UpdateWorkScheduleInput) -> APIResponse<WorkSchedule> {
        if let (Some(start), Some(end)) = (&input.shift_start, &input.shift_end) {
            ShiftTime::validate_span(start, end).map_err(APIError::bad_client_data)?;
        }
        let body = update_work_schedule::RequestBody {
            day_of_week: input.day_of_week.as_ref().map(weekday_index),
            shift_start: input.shift_start,
            shift_end: input.shift_end,
            note: input.note,
        };
        let dto: update_work_schedule::APIResponse = self
            .base
            .put(
                body,
                format!("work-schedules/{}", input.schedule_id),
                StatusCode::OK,
            )
            .await?;
        WorkSchedule::try_from(dto).map_err(APIError::malformed)
    }

    pub async fn delete(&self, schedule_id: ID) -> APIResponse<()> {
        self.base
            .delete(format!("work-schedules/{}", schedule_id), StatusCode::OK)
            .await
    }

    /// Expands a day x shift plan and submits every draft as its own
    /// creation request, all issued concurrently. Creations that went
    /// through before a failure are not rolled back; the error carries
    /// the itemized breakdown instead. On full success the owner's
    /// schedule list is reloaded so the caller sees the new state.
    pub async fn quick_create(
        &self,
        plan: &QuickSchedulePlan,
    ) -> Result<QuickCreateReport, QuickCreateBatchError> {
        let drafts = plan.expand()?;
        tracing::debug!("Submitting {} work schedule creations", drafts.len());

        let results = join_all(drafts.iter().map(|draft| self.create_draft(draft))).await;

        let mut created = Vec::new();
        let mut failed = Vec::new();
        for (draft, result) in drafts.into_iter().zip(results) {
            match result {
                Ok(schedule) => created.push(schedule),
                Err(error) => failed.push(QuickCreateFailure { draft, error }),
            }
        }

        if !failed.is_empty() {
            return Err(QuickCreateBatchError::Partial { created, failed });
        }

        let schedules = self.get_for_owner(plan.owner()).await?;
        Ok(QuickCreateReport { created, schedules })
    }

    async fn create_draft(&self, draft: &WorkScheduleDraft) -> APIResponse<WorkSchedule> {
        let body = create_work_schedule::RequestBody::new(draft);
        let dto: create_work_schedule::APIResponse = self
            .base
            .post(body, "work-schedules".into(), StatusCode::CREATED)
            .await?;
        WorkSchedule::try_from(dto).map_err(APIError::malformed)
    }
}

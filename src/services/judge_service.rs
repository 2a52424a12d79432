//! Judge assignment and scoring service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{MAX_JUDGES_PER_COMPETITION, roles},
    db::repositories::{
        CompetitionRepository, JudgeRepository, SubmissionRepository, UserRepository,
    },
    error::{AppError, AppResult},
    models::{Judge, Score, Submission},
};

/// Judge service for business logic
pub struct JudgeService;

impl JudgeService {
    /// Assign a user as judge of a competition (admin only, capped at 3)
    pub async fn assign_judge(
        pool: &PgPool,
        user_id: &Uuid,
        competition_id: &Uuid,
    ) -> AppResult<Judge> {
        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if JudgeRepository::find_for_competition(pool, user_id, competition_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Judge already assigned to this competition".to_string(),
            ));
        }

        if JudgeRepository::count_by_competition(pool, competition_id).await?
            >= MAX_JUDGES_PER_COMPETITION
        {
            return Err(AppError::Conflict(format!(
                "Maximum {MAX_JUDGES_PER_COMPETITION} judges per competition"
            )));
        }

        if user.role != roles::JUDGE {
            UserRepository::update_role(pool, user_id, roles::JUDGE).await?;
        }

        JudgeRepository::create(pool, user_id, competition_id).await
    }

    /// List judges of a competition
    pub async fn get_judges(pool: &PgPool, competition_id: &Uuid) -> AppResult<Vec<Judge>> {
        JudgeRepository::list_by_competition(pool, competition_id).await
    }

    /// Score a submission as the acting judge.
    ///
    /// Re-scoring by the same judge updates the existing row.
    pub async fn score_submission(
        pool: &PgPool,
        actor_id: &Uuid,
        submission_id: &Uuid,
        score: i32,
        comments: Option<&str>,
    ) -> AppResult<Score> {
        let submission = SubmissionRepository::find_by_id(pool, submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let judge =
            JudgeRepository::find_for_competition(pool, actor_id, &submission.competition_id)
                .await?
                .ok_or_else(|| {
                    AppError::Forbidden(
                        "Not assigned as judge for this competition".to_string(),
                    )
                })?;

        JudgeRepository::upsert_score(pool, submission_id, &judge.id, score, comments).await
    }

    /// List the submissions of a competition stage for the acting judge,
    /// together with that judge's existing scores
    pub async fn submissions_for_judging(
        pool: &PgPool,
        actor_id: &Uuid,
        competition_id: &Uuid,
        stage_id: &Uuid,
    ) -> AppResult<Vec<(Submission, Vec<Score>)>> {
        let judge = JudgeRepository::find_for_competition(pool, actor_id, competition_id)
            .await?
            .ok_or_else(|| {
                AppError::Forbidden("Not assigned as judge for this competition".to_string())
            })?;

        let submissions =
            SubmissionRepository::list_by_competition_stage(pool, competition_id, stage_id)
                .await?;

        let mut result = Vec::with_capacity(submissions.len());
        for submission in submissions {
            let scores =
                JudgeRepository::list_scores(pool, &submission.id, &judge.id).await?;
            result.push((submission, scores));
        }

        Ok(result)
    }
}

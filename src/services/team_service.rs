//! Team formation service
//!
//! Team lifecycle from creation through completion or disqualification.
//! The join path serializes on a row lock so the last seat cannot be
//! handed out twice; invite-code allocation retries a bounded number of
//! times against the unique index.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{
        DEFAULT_TEAM_CAPACITY, INVITE_CODE_MAX_ATTEMPTS, TEAM_ROLE_LEADER, TEAM_ROLE_MEMBER,
    },
    db::repositories::{CompetitionRepository, TeamRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Team, User},
    utils::codes,
};

/// Team service for business logic
pub struct TeamService;

impl TeamService {
    /// Create a team with the actor as leader.
    ///
    /// Team insert and the leader's team reference are one transaction; the
    /// invite code is retried on collision up to a fixed bound.
    pub async fn create_team(
        pool: &PgPool,
        actor_id: &Uuid,
        competition_id: &Uuid,
        name: &str,
    ) -> AppResult<Team> {
        let actor = UserRepository::find_by_id(pool, actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !actor.can_create_team() {
            return Err(AppError::Forbidden(
                "Only qualified users can create teams".to_string(),
            ));
        }

        if actor.has_team() {
            return Err(AppError::Conflict("User is already in a team".to_string()));
        }

        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        for _ in 0..INVITE_CODE_MAX_ATTEMPTS {
            let invite_code = codes::generate_invite_code();

            let mut tx = pool.begin().await?;

            let inserted = sqlx::query_as::<_, Team>(
                r#"
                INSERT INTO teams (name, invite_code, competition_id, leader_id, max_members)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(name)
            .bind(&invite_code)
            .bind(competition_id)
            .bind(actor_id)
            .bind(DEFAULT_TEAM_CAPACITY)
            .fetch_one(&mut *tx)
            .await;

            let team = match inserted {
                Ok(team) => team,
                // Invite code collided with a concurrent insert; draw again
                Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => continue,
                Err(e) => return Err(e.into()),
            };

            // Conditional so a concurrent create/join cannot attach the actor twice
            let attached = sqlx::query(
                r#"
                UPDATE users
                SET team_id = $2, team_role = $3, updated_at = NOW()
                WHERE id = $1 AND team_id IS NULL
                "#,
            )
            .bind(actor_id)
            .bind(team.id)
            .bind(TEAM_ROLE_LEADER)
            .execute(&mut *tx)
            .await?;

            if attached.rows_affected() == 0 {
                return Err(AppError::Conflict("User is already in a team".to_string()));
            }

            tx.commit().await?;
            return Ok(team);
        }

        Err(AppError::InviteCodesExhausted(INVITE_CODE_MAX_ATTEMPTS))
    }

    /// Join a team by invite code.
    ///
    /// The team row is locked for the duration of the transaction, so the
    /// member count cannot change underneath the capacity check: of two
    /// simultaneous joins on the last seat, exactly one succeeds.
    pub async fn join_team(pool: &PgPool, actor_id: &Uuid, invite_code: &str) -> AppResult<Team> {
        let actor = UserRepository::find_by_id(pool, actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if actor.has_team() {
            return Err(AppError::Conflict("User is already in a team".to_string()));
        }

        let code = codes::normalize_invite_code(invite_code);

        let mut tx = pool.begin().await?;

        let team = sqlx::query_as::<_, Team>(
            r#"SELECT * FROM teams WHERE invite_code = $1 FOR UPDATE"#,
        )
        .bind(&code)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Invalid invite code".to_string()))?;

        if !team.accepts_members() {
            return Err(AppError::Conflict(
                "Team is full or disqualified".to_string(),
            ));
        }

        let member_count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM users WHERE team_id = $1"#)
                .bind(team.id)
                .fetch_one(&mut *tx)
                .await?;

        if team.is_full_at(member_count) {
            return Err(AppError::Conflict("Team is full".to_string()));
        }

        let attached = sqlx::query(
            r#"
            UPDATE users
            SET team_id = $2, team_role = $3, updated_at = NOW()
            WHERE id = $1 AND team_id IS NULL
            "#,
        )
        .bind(actor_id)
        .bind(team.id)
        .bind(TEAM_ROLE_MEMBER)
        .execute(&mut *tx)
        .await?;

        if attached.rows_affected() == 0 {
            return Err(AppError::Conflict("User is already in a team".to_string()));
        }

        // This join may have taken the last seat
        let team = if team.is_full_at(member_count + 1) {
            sqlx::query_as::<_, Team>(
                r#"
                UPDATE teams
                SET is_complete = TRUE, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(team.id)
            .fetch_one(&mut *tx)
            .await?
        } else {
            team
        };

        tx.commit().await?;

        Ok(team)
    }

    /// Get the actor's team with its members
    pub async fn get_my_team(pool: &PgPool, actor_id: &Uuid) -> AppResult<(Team, Vec<User>)> {
        let actor = UserRepository::find_by_id(pool, actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let team_id = actor
            .team_id
            .ok_or_else(|| AppError::NotFound("User is not in a team".to_string()))?;

        let team = TeamRepository::find_by_id(pool, &team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        let members = UserRepository::list_team_members(pool, &team_id).await?;

        Ok((team, members))
    }

    /// List a competition's teams with their members
    pub async fn list_teams(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<(Team, Vec<User>)>> {
        let teams = TeamRepository::list_by_competition(pool, competition_id).await?;

        let mut result = Vec::with_capacity(teams.len());
        for team in teams {
            let members = UserRepository::list_team_members(pool, &team.id).await?;
            result.push((team, members));
        }

        Ok(result)
    }

    /// Assign a free-text team role label to a member (leader only)
    pub async fn assign_team_role(
        pool: &PgPool,
        actor_id: &Uuid,
        target_user_id: &Uuid,
        team_role: &str,
    ) -> AppResult<User> {
        let actor = UserRepository::find_by_id(pool, actor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let team_id = match actor.team_id {
            Some(team_id) if actor.leads(&team_id) => team_id,
            _ => {
                return Err(AppError::Forbidden(
                    "Only team leader can assign roles".to_string(),
                ));
            }
        };

        UserRepository::update_team_role(pool, target_user_id, &team_id, team_role)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found in team".to_string()))
    }

    /// Disqualify every still-incomplete team of a competition.
    ///
    /// Incompleteness is re-checked against the actual member count at call
    /// time, not the cached flag. One-way; there is no requalify path.
    pub async fn disqualify_incomplete_teams(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<u64> {
        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        TeamRepository::disqualify_incomplete(pool, competition_id).await
    }
}

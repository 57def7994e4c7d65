//! The application state store.
//!
//! `AppStore` is the single authority over the in-memory snapshot and the
//! only path to durable storage. It is an explicit state object owned by
//! the composition root; every mutation takes `&mut self`, so the
//! single-writer guarantee is structural rather than lock-based.
//!
//! Each operation persists through the repository first and patches the
//! snapshot only after the write resolves, so a failed write never leaves
//! a partially mutated snapshot behind.

use std::sync::Arc;

use chrono::NaiveDateTime;
use log::{debug, error};
use uuid::Uuid;

use crate::achievements::{Achievement, AchievementId, AchievementRepositoryTrait};
use crate::categories::{Category, CategoryRepositoryTrait, NewCategory};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use crate::logs::{NewProgressLog, ProgressLogRepositoryTrait};
use crate::milestones::{Milestone, MilestoneRepositoryTrait, NewMilestone};
use crate::portability::ExportedData;
use crate::store::{CategoryGoalCount, StoreStats};

fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

fn id_or_generate(id: Option<String>) -> String {
    id.unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Reactive application state: the in-memory mirror of the active
/// collections plus the rule engines that keep it consistent.
pub struct AppStore {
    categories: Vec<Category>,
    goals: Vec<Goal>,
    milestones: Vec<Milestone>,
    achievements: Vec<Achievement>,
    is_loading: bool,

    category_repository: Arc<dyn CategoryRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    milestone_repository: Arc<dyn MilestoneRepositoryTrait>,
    achievement_repository: Arc<dyn AchievementRepositoryTrait>,
    log_repository: Arc<dyn ProgressLogRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl AppStore {
    /// Creates an empty store. Call [`AppStore::load_data`] before anything
    /// else; there is no lazy auto-load.
    pub fn new(
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        milestone_repository: Arc<dyn MilestoneRepositoryTrait>,
        achievement_repository: Arc<dyn AchievementRepositoryTrait>,
        log_repository: Arc<dyn ProgressLogRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        AppStore {
            categories: Vec::new(),
            goals: Vec::new(),
            milestones: Vec::new(),
            achievements: Vec::new(),
            is_loading: true,
            category_repository,
            goal_repository,
            milestone_repository,
            achievement_repository,
            log_repository,
            event_sink,
        }
    }

    // ---- snapshot accessors ----

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    /// Milestones belonging to one goal, in insertion order.
    pub fn milestones_for(&self, goal_id: &str) -> Vec<&Milestone> {
        self.milestones
            .iter()
            .filter(|m| m.goal_id == goal_id)
            .collect()
    }

    /// Aggregate statistics over the current snapshot.
    pub fn stats(&self) -> StoreStats {
        let total_goals = self.goals.len();
        let completed_goals = self
            .goals
            .iter()
            .filter(|g| g.counts_as_completed())
            .count();
        let completion_rate = if total_goals > 0 {
            ((completed_goals as f64 / total_goals as f64) * 100.0).round() as u32
        } else {
            0
        };
        let goals_per_category = self
            .categories
            .iter()
            .map(|category| CategoryGoalCount {
                category_id: category.id.clone(),
                name: category.name.clone(),
                count: self
                    .goals
                    .iter()
                    .filter(|g| g.category_id == category.id)
                    .count(),
            })
            .filter(|entry| entry.count > 0)
            .collect();

        StoreStats {
            total_goals,
            completed_goals,
            completion_rate,
            goals_per_category,
        }
    }

    // ---- lifecycle ----

    /// Replaces the snapshot wholesale from durable storage.
    ///
    /// Adapter failures are logged and swallowed: the loading flag is
    /// cleared and whatever snapshot was present stays in place.
    pub async fn load_data(&mut self) {
        self.is_loading = true;
        match self.try_load() {
            Ok((categories, goals, milestones, achievements)) => {
                self.categories = categories;
                self.goals = goals;
                self.milestones = milestones;
                self.achievements = achievements;
            }
            Err(e) => {
                error!("Failed to load data: {}", e);
            }
        }
        self.is_loading = false;
    }

    #[allow(clippy::type_complexity)]
    fn try_load(&self) -> Result<(Vec<Category>, Vec<Goal>, Vec<Milestone>, Vec<Achievement>)> {
        Ok((
            self.category_repository.load_categories()?,
            self.goal_repository.load_goals()?,
            self.milestone_repository.load_milestones()?,
            self.achievement_repository.load_achievements()?,
        ))
    }

    // ---- mutations ----

    /// Creates a category. Categories gate no badges, so no achievement
    /// sweep runs here.
    pub async fn add_category(&mut self, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;
        let id = id_or_generate(new_category.id.clone());
        let category = new_category.into_category(id, now());

        let category = self.category_repository.put_category(category).await?;
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Creates a goal and runs the achievement sweep.
    pub async fn add_goal(&mut self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        let id = id_or_generate(new_goal.id.clone());
        let goal = new_goal.into_goal(id, now());

        let goal = self.goal_repository.put_goal(goal).await?;
        self.goals.push(goal.clone());
        self.check_achievements().await?;
        Ok(goal)
    }

    /// Merges a partial update into a goal, applying the completion rule.
    ///
    /// Returns `Ok(None)` when the id is unknown; an update addressed at a
    /// nonexistent goal is a silent no-op, not an error.
    pub async fn update_goal(&mut self, goal_id: &str, update: GoalUpdate) -> Result<Option<Goal>> {
        let Some(index) = self.goals.iter().position(|g| g.id == goal_id) else {
            debug!("update_goal: no goal with id {}", goal_id);
            return Ok(None);
        };

        let mut goal = self.goals[index].clone();
        update.apply_to(&mut goal);
        goal.updated_at = now();
        // The rule reads the store's in-memory milestone list, not a fresh
        // load; the single-writer model keeps that projection current.
        goal.apply_completion_rule(&self.milestones);

        let goal = self.goal_repository.put_goal(goal).await?;
        self.goals[index] = goal.clone();
        self.check_achievements().await?;
        Ok(Some(goal))
    }

    /// Creates a milestone and runs the achievement sweep.
    ///
    /// Adding a milestone never re-derives the parent goal's completion;
    /// only toggling does.
    pub async fn add_milestone(&mut self, new_milestone: NewMilestone) -> Result<Milestone> {
        new_milestone.validate()?;
        let id = id_or_generate(new_milestone.id.clone());
        let milestone = new_milestone.into_milestone(id, now());

        let milestone = self.milestone_repository.put_milestone(milestone).await?;
        self.milestones.push(milestone.clone());
        self.check_achievements().await?;
        Ok(milestone)
    }

    /// Flips a milestone's completion flag.
    ///
    /// When the flip leaves every milestone of the parent goal complete,
    /// the goal auto-completes through [`AppStore::update_goal`]. Returns
    /// `Ok(None)` when the id is unknown.
    pub async fn toggle_milestone(&mut self, milestone_id: &str) -> Result<Option<Milestone>> {
        let Some(index) = self.milestones.iter().position(|m| m.id == milestone_id) else {
            debug!("toggle_milestone: no milestone with id {}", milestone_id);
            return Ok(None);
        };

        let mut milestone = self.milestones[index].clone();
        milestone.is_completed = !milestone.is_completed;
        milestone.updated_at = now();

        let milestone = self.milestone_repository.put_milestone(milestone).await?;
        self.milestones[index] = milestone.clone();

        let all_completed = {
            let siblings: Vec<&Milestone> = self
                .milestones
                .iter()
                .filter(|m| m.goal_id == milestone.goal_id)
                .collect();
            !siblings.is_empty() && siblings.iter().all(|m| m.is_completed)
        };
        if all_completed {
            let goal_id = milestone.goal_id.clone();
            self.update_goal(&goal_id, GoalUpdate::completed()).await?;
        }

        self.check_achievements().await?;
        Ok(Some(milestone))
    }

    /// Deletes a category and cascades through every goal it owns.
    /// Deletes never re-evaluate achievements.
    pub async fn delete_category(&mut self, category_id: &str) -> Result<()> {
        let owned_goal_ids: Vec<String> = self
            .goals
            .iter()
            .filter(|g| g.category_id == category_id)
            .map(|g| g.id.clone())
            .collect();

        // Route through delete_goal so per-goal milestone cleanup runs.
        for goal_id in owned_goal_ids {
            self.delete_goal(&goal_id).await?;
        }

        self.category_repository
            .delete_category(category_id.to_string())
            .await?;
        self.categories.retain(|c| c.id != category_id);
        Ok(())
    }

    /// Deletes a goal along with all of its milestones.
    ///
    /// Deleting the last remaining goal resets every achievement, in
    /// storage and in memory: reaching zero goals is an intentional fresh
    /// start, not an error path.
    pub async fn delete_goal(&mut self, goal_id: &str) -> Result<()> {
        let owned_milestone_ids: Vec<String> = self
            .milestones
            .iter()
            .filter(|m| m.goal_id == goal_id)
            .map(|m| m.id.clone())
            .collect();

        for milestone_id in owned_milestone_ids {
            self.milestone_repository
                .delete_milestone(milestone_id)
                .await?;
        }

        self.goal_repository.delete_goal(goal_id.to_string()).await?;
        self.goals.retain(|g| g.id != goal_id);
        self.milestones.retain(|m| m.goal_id != goal_id);

        if self.goals.is_empty() {
            debug!("No goals remain; resetting achievements");
            self.achievement_repository.delete_all_achievements().await?;
            self.achievements.clear();
        }
        Ok(())
    }

    /// Deletes a milestone. The parent goal's completion is not
    /// re-derived and no achievement sweep runs.
    pub async fn delete_milestone(&mut self, milestone_id: &str) -> Result<()> {
        self.milestone_repository
            .delete_milestone(milestone_id.to_string())
            .await?;
        self.milestones.retain(|m| m.id != milestone_id);
        Ok(())
    }

    /// Persists a progress log entry and routes the value bump through
    /// [`AppStore::update_goal`] (and with it the completion rule).
    ///
    /// Returns `Ok(None)` without writing anything when the goal is
    /// unknown, so no orphan log row is ever created.
    pub async fn log_progress(&mut self, new_log: NewProgressLog) -> Result<Option<Goal>> {
        let Some(goal) = self.goal(&new_log.goal_id) else {
            debug!("log_progress: no goal with id {}", new_log.goal_id);
            return Ok(None);
        };
        let goal_id = goal.id.clone();
        let new_value = goal.current_value + new_log.value;

        let id = id_or_generate(new_log.id.clone());
        let log = new_log.into_log(id, now());
        self.log_repository.put_log(log).await?;

        let update = GoalUpdate {
            current_value: Some(new_value),
            ..Default::default()
        };
        self.update_goal(&goal_id, update).await
    }

    // ---- achievement rule engine ----

    fn has_achievement(&self, id: AchievementId) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }

    /// One full pass of the achievement predicates.
    ///
    /// Newly qualified badges are collected first, then persisted and
    /// announced one by one, then appended to the snapshot in a single
    /// batch. Re-running the sweep with unchanged state is a no-op.
    pub async fn check_achievements(&mut self) -> Result<Vec<Achievement>> {
        let mut newly_unlocked = Vec::new();

        if !self.goals.is_empty() && !self.has_achievement(AchievementId::FirstGoal) {
            newly_unlocked.push(Achievement::unlock(AchievementId::FirstGoal, now()));
        }

        if self.milestones.iter().any(|m| m.is_completed)
            && !self.has_achievement(AchievementId::FirstMilestone)
        {
            newly_unlocked.push(Achievement::unlock(AchievementId::FirstMilestone, now()));
        }

        if self.goals.iter().any(|g| g.counts_as_completed())
            && !self.has_achievement(AchievementId::FirstCompletion)
        {
            newly_unlocked.push(Achievement::unlock(AchievementId::FirstCompletion, now()));
        }

        for achievement in &newly_unlocked {
            self.achievement_repository
                .put_achievement(achievement.clone())
                .await?;
            // Best-effort notification; the sink must never fail the
            // mutation that earned the badge.
            self.event_sink.emit(DomainEvent::achievement_unlocked(
                achievement.id,
                achievement.title.clone(),
                achievement.description.clone(),
            ));
        }

        self.achievements.extend(newly_unlocked.iter().cloned());
        Ok(newly_unlocked)
    }

    // ---- portability ----

    /// Builds a backup document from the current snapshot.
    pub fn export_data(&self) -> ExportedData {
        ExportedData::new(
            self.categories.clone(),
            self.goals.clone(),
            self.milestones.clone(),
            self.achievements.clone(),
        )
    }

    /// Wipe-then-restore import.
    ///
    /// The document must already be parsed (see
    /// [`ExportedData::from_json`]), so a malformed backup is rejected
    /// before any wipe happens. Records are re-inserted through the raw
    /// `put` primitives, never through `add_*`, so the original
    /// timestamps are preserved verbatim. Finishes with a full reload.
    pub async fn import_data(&mut self, data: ExportedData) -> Result<()> {
        self.category_repository.delete_all_categories().await?;
        self.goal_repository.delete_all_goals().await?;
        self.milestone_repository.delete_all_milestones().await?;
        self.achievement_repository.delete_all_achievements().await?;

        for category in data.categories {
            self.category_repository.put_category(category).await?;
        }
        for goal in data.goals {
            self.goal_repository.put_goal(goal).await?;
        }
        for milestone in data.milestones {
            self.milestone_repository.put_milestone(milestone).await?;
        }
        for achievement in data.achievements {
            self.achievement_repository
                .put_achievement(achievement)
                .await?;
        }

        self.load_data().await;
        Ok(())
    }

    /// Erases every collection, progress logs included, and reloads the
    /// (now empty) snapshot.
    pub async fn reset_all(&mut self) -> Result<()> {
        self.category_repository.delete_all_categories().await?;
        self.goal_repository.delete_all_goals().await?;
        self.milestone_repository.delete_all_milestones().await?;
        self.achievement_repository.delete_all_achievements().await?;
        self.log_repository.delete_all_logs().await?;

        self.load_data().await;
        Ok(())
    }
}

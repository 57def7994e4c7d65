#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::achievements::{Achievement, AchievementId, AchievementRepositoryTrait};
    use crate::categories::{Category, CategoryRepositoryTrait, NewCategory};
    use crate::errors::{DatabaseError, Error, Result};
    use crate::events::{DomainEvent, MockDomainEventSink};
    use crate::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
    use crate::logs::{NewProgressLog, ProgressLog, ProgressLogRepositoryTrait};
    use crate::milestones::{Milestone, MilestoneRepositoryTrait, NewMilestone};
    use crate::portability::ExportedData;
    use crate::store::AppStore;

    // --- Mock repositories backed by shared vectors ---

    #[derive(Clone, Default)]
    struct MockCategoryRepository {
        records: Arc<Mutex<Vec<Category>>>,
    }

    #[async_trait]
    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn load_categories(&self) -> Result<Vec<Category>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn put_category(&self, category: Category) -> Result<Category> {
            let mut records = self.records.lock().unwrap();
            if let Some(existing) = records.iter_mut().find(|c| c.id == category.id) {
                *existing = category.clone();
            } else {
                records.push(category.clone());
            }
            Ok(category)
        }

        async fn delete_category(&self, category_id: String) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|c| c.id != category_id);
            Ok(before - records.len())
        }

        async fn delete_all_categories(&self) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let count = records.len();
            records.clear();
            Ok(count)
        }
    }

    #[derive(Clone, Default)]
    struct MockGoalRepository {
        records: Arc<Mutex<Vec<Goal>>>,
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals(&self) -> Result<Vec<Goal>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn put_goal(&self, goal: Goal) -> Result<Goal> {
            let mut records = self.records.lock().unwrap();
            if let Some(existing) = records.iter_mut().find(|g| g.id == goal.id) {
                *existing = goal.clone();
            } else {
                records.push(goal.clone());
            }
            Ok(goal)
        }

        async fn delete_goal(&self, goal_id: String) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|g| g.id != goal_id);
            Ok(before - records.len())
        }

        async fn delete_all_goals(&self) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let count = records.len();
            records.clear();
            Ok(count)
        }
    }

    #[derive(Clone, Default)]
    struct MockMilestoneRepository {
        records: Arc<Mutex<Vec<Milestone>>>,
    }

    #[async_trait]
    impl MilestoneRepositoryTrait for MockMilestoneRepository {
        fn load_milestones(&self) -> Result<Vec<Milestone>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn put_milestone(&self, milestone: Milestone) -> Result<Milestone> {
            let mut records = self.records.lock().unwrap();
            if let Some(existing) = records.iter_mut().find(|m| m.id == milestone.id) {
                *existing = milestone.clone();
            } else {
                records.push(milestone.clone());
            }
            Ok(milestone)
        }

        async fn delete_milestone(&self, milestone_id: String) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|m| m.id != milestone_id);
            Ok(before - records.len())
        }

        async fn delete_all_milestones(&self) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let count = records.len();
            records.clear();
            Ok(count)
        }
    }

    #[derive(Clone, Default)]
    struct MockAchievementRepository {
        records: Arc<Mutex<Vec<Achievement>>>,
    }

    #[async_trait]
    impl AchievementRepositoryTrait for MockAchievementRepository {
        fn load_achievements(&self) -> Result<Vec<Achievement>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn put_achievement(&self, achievement: Achievement) -> Result<Achievement> {
            let mut records = self.records.lock().unwrap();
            if let Some(existing) = records.iter_mut().find(|a| a.id == achievement.id) {
                *existing = achievement.clone();
            } else {
                records.push(achievement.clone());
            }
            Ok(achievement)
        }

        async fn delete_achievement(&self, achievement_id: String) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|a| a.id.as_str() != achievement_id);
            Ok(before - records.len())
        }

        async fn delete_all_achievements(&self) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let count = records.len();
            records.clear();
            Ok(count)
        }
    }

    #[derive(Clone, Default)]
    struct MockLogRepository {
        records: Arc<Mutex<Vec<ProgressLog>>>,
    }

    #[async_trait]
    impl ProgressLogRepositoryTrait for MockLogRepository {
        fn load_logs(&self) -> Result<Vec<ProgressLog>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn put_log(&self, log: ProgressLog) -> Result<ProgressLog> {
            let mut records = self.records.lock().unwrap();
            if let Some(existing) = records.iter_mut().find(|l| l.id == log.id) {
                *existing = log.clone();
            } else {
                records.push(log.clone());
            }
            Ok(log)
        }

        async fn delete_log(&self, log_id: String) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|l| l.id != log_id);
            Ok(before - records.len())
        }

        async fn delete_all_logs(&self) -> Result<usize> {
            let mut records = self.records.lock().unwrap();
            let count = records.len();
            records.clear();
            Ok(count)
        }
    }

    /// Category repository whose reads always fail, for the load-failure
    /// path.
    #[derive(Clone, Default)]
    struct BrokenCategoryRepository;

    #[async_trait]
    impl CategoryRepositoryTrait for BrokenCategoryRepository {
        fn load_categories(&self) -> Result<Vec<Category>> {
            Err(Error::Database(DatabaseError::QueryFailed(
                "disk on fire".to_string(),
            )))
        }

        async fn put_category(&self, _category: Category) -> Result<Category> {
            Err(Error::Database(DatabaseError::QueryFailed(
                "disk on fire".to_string(),
            )))
        }

        async fn delete_category(&self, _category_id: String) -> Result<usize> {
            Err(Error::Database(DatabaseError::QueryFailed(
                "disk on fire".to_string(),
            )))
        }

        async fn delete_all_categories(&self) -> Result<usize> {
            Err(Error::Database(DatabaseError::QueryFailed(
                "disk on fire".to_string(),
            )))
        }
    }

    struct Fixture {
        store: AppStore,
        categories: MockCategoryRepository,
        goals: MockGoalRepository,
        milestones: MockMilestoneRepository,
        achievements: MockAchievementRepository,
        logs: MockLogRepository,
        sink: MockDomainEventSink,
    }

    fn fixture() -> Fixture {
        let categories = MockCategoryRepository::default();
        let goals = MockGoalRepository::default();
        let milestones = MockMilestoneRepository::default();
        let achievements = MockAchievementRepository::default();
        let logs = MockLogRepository::default();
        let sink = MockDomainEventSink::new();

        let store = AppStore::new(
            Arc::new(categories.clone()),
            Arc::new(goals.clone()),
            Arc::new(milestones.clone()),
            Arc::new(achievements.clone()),
            Arc::new(logs.clone()),
            Arc::new(sink.clone()),
        );

        Fixture {
            store,
            categories,
            goals,
            milestones,
            achievements,
            logs,
            sink,
        }
    }

    fn new_category(id: &str, name: &str) -> NewCategory {
        NewCategory {
            id: Some(id.to_string()),
            name: name.to_string(),
            icon: None,
            color: None,
        }
    }

    fn new_goal(id: &str, category_id: &str, target: Option<f64>) -> NewGoal {
        NewGoal {
            id: Some(id.to_string()),
            title: format!("goal {}", id),
            description: None,
            category_id: category_id.to_string(),
            current_value: 0.0,
            target_value: target,
            unit: None,
            deadline: None,
        }
    }

    fn new_milestone(id: &str, goal_id: &str) -> NewMilestone {
        NewMilestone {
            id: Some(id.to_string()),
            title: format!("milestone {}", id),
            goal_id: goal_id.to_string(),
        }
    }

    // --- creation & stamping ---

    #[tokio::test]
    async fn test_add_category_persists_and_stamps() {
        let mut f = fixture();
        let category = f.store.add_category(new_category("c1", "Health")).await.unwrap();

        assert_eq!(category.created_at, category.updated_at);
        assert_eq!(f.store.categories().len(), 1);
        assert_eq!(f.categories.records.lock().unwrap().len(), 1);
        // Categories gate no badges.
        assert!(f.sink.is_empty());
        assert!(f.store.achievements().is_empty());
    }

    #[tokio::test]
    async fn test_add_category_rejects_blank_name() {
        let mut f = fixture();
        let result = f.store.add_category(new_category("c1", "   ")).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(f.categories.records.lock().unwrap().is_empty());
        assert!(f.store.categories().is_empty());
    }

    #[tokio::test]
    async fn test_add_goal_generates_id_when_absent() {
        let mut f = fixture();
        let goal = f
            .store
            .add_goal(NewGoal {
                id: None,
                ..new_goal("ignored", "c1", None)
            })
            .await
            .unwrap();
        assert!(!goal.id.is_empty());
    }

    // --- achievement rule engine ---

    #[tokio::test]
    async fn test_first_goal_unlocks_exactly_once() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", None)).await.unwrap();

        let unlocked: Vec<AchievementId> =
            f.store.achievements().iter().map(|a| a.id).collect();
        assert_eq!(unlocked, vec![AchievementId::FirstGoal]);

        // A second goal must not re-unlock the badge.
        f.store.add_goal(new_goal("g2", "c1", None)).await.unwrap();
        assert_eq!(f.store.achievements().len(), 1);
        assert_eq!(f.achievements.records.lock().unwrap().len(), 1);
        assert_eq!(f.sink.len(), 1);
    }

    #[tokio::test]
    async fn test_sweep_is_idempotent() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", None)).await.unwrap();

        let first = f.store.check_achievements().await.unwrap();
        assert!(first.is_empty());
        let second = f.store.check_achievements().await.unwrap();
        assert!(second.is_empty());

        assert_eq!(f.store.achievements().len(), 1);
        assert_eq!(f.achievements.records.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unlock_emits_one_event_per_badge() {
        let mut f = fixture();
        let category = f.store.add_category(new_category("c1", "Books")).await.unwrap();
        f.store
            .add_goal(new_goal("g1", &category.id, Some(1.0)))
            .await
            .unwrap();
        // Reaching the target unlocks first-completion alongside the
        // already-held first-goal.
        f.store
            .update_goal(
                "g1",
                GoalUpdate {
                    current_value: Some(1.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let events = f.sink.events();
        assert_eq!(events.len(), 2);
        let ids: Vec<AchievementId> = events
            .iter()
            .map(|e| match e {
                DomainEvent::AchievementUnlocked { id, .. } => *id,
            })
            .collect();
        assert_eq!(ids, vec![AchievementId::FirstGoal, AchievementId::FirstCompletion]);
    }

    // --- numeric completion ---

    #[tokio::test]
    async fn test_numeric_progress_boundary() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", Some(10.0))).await.unwrap();

        let goal = f
            .store
            .update_goal(
                "g1",
                GoalUpdate {
                    current_value: Some(9.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(!goal.is_completed);

        let goal = f
            .store
            .update_goal(
                "g1",
                GoalUpdate {
                    current_value: Some(10.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(goal.is_completed);

        let goal = f
            .store
            .update_goal(
                "g1",
                GoalUpdate {
                    current_value: Some(15.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(goal.is_completed);
    }

    #[tokio::test]
    async fn test_completion_is_monotonic() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", Some(10.0))).await.unwrap();
        f.store
            .update_goal(
                "g1",
                GoalUpdate {
                    current_value: Some(10.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // Dropping back below the target never un-completes.
        let goal = f
            .store
            .update_goal(
                "g1",
                GoalUpdate {
                    current_value: Some(3.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert!(goal.is_completed);
        assert!(f.goals.records.lock().unwrap()[0].is_completed);
    }

    #[tokio::test]
    async fn test_update_unknown_goal_is_silent_noop() {
        let mut f = fixture();
        let result = f
            .store
            .update_goal("ghost", GoalUpdate::completed())
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(f.goals.records.lock().unwrap().is_empty());
    }

    // --- milestone-driven completion ---

    #[tokio::test]
    async fn test_milestone_driven_completion() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", None)).await.unwrap();
        f.store.add_milestone(new_milestone("m1", "g1")).await.unwrap();
        f.store.add_milestone(new_milestone("m2", "g1")).await.unwrap();

        f.store.toggle_milestone("m1").await.unwrap();
        assert!(!f.store.goal("g1").unwrap().is_completed);

        f.store.toggle_milestone("m2").await.unwrap();
        let goal = f.store.goal("g1").unwrap();
        assert!(goal.is_completed);
        // The auto-completion went through the persistence path too.
        assert!(f.goals.records.lock().unwrap()[0].is_completed);

        let ids: Vec<AchievementId> = f.store.achievements().iter().map(|a| a.id).collect();
        assert!(ids.contains(&AchievementId::FirstMilestone));
        assert!(ids.contains(&AchievementId::FirstCompletion));
    }

    #[tokio::test]
    async fn test_unchecking_milestone_keeps_goal_completed() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", None)).await.unwrap();
        f.store.add_milestone(new_milestone("m1", "g1")).await.unwrap();

        f.store.toggle_milestone("m1").await.unwrap();
        assert!(f.store.goal("g1").unwrap().is_completed);

        f.store.toggle_milestone("m1").await.unwrap();
        assert!(!f.store.milestones()[0].is_completed);
        // No automatic un-completion.
        assert!(f.store.goal("g1").unwrap().is_completed);
    }

    #[tokio::test]
    async fn test_toggle_unknown_milestone_is_silent_noop() {
        let mut f = fixture();
        let result = f.store.toggle_milestone("ghost").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_milestone_skips_rules() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", None)).await.unwrap();
        f.store.add_milestone(new_milestone("m1", "g1")).await.unwrap();
        f.store.add_milestone(new_milestone("m2", "g1")).await.unwrap();
        f.store.toggle_milestone("m1").await.unwrap();

        // Removing the incomplete milestone leaves only completed ones,
        // but deletes never re-derive completion.
        f.store.delete_milestone("m2").await.unwrap();
        assert_eq!(f.store.milestones().len(), 1);
        assert!(!f.store.goal("g1").unwrap().is_completed);
    }

    // --- cascades & reset ---

    #[tokio::test]
    async fn test_cascade_delete_category() {
        let mut f = fixture();
        f.store.add_category(new_category("c1", "Fitness")).await.unwrap();
        for goal_id in ["g1", "g2"] {
            f.store.add_goal(new_goal(goal_id, "c1", None)).await.unwrap();
            f.store
                .add_milestone(new_milestone(&format!("{}-m1", goal_id), goal_id))
                .await
                .unwrap();
            f.store
                .add_milestone(new_milestone(&format!("{}-m2", goal_id), goal_id))
                .await
                .unwrap();
        }

        f.store.delete_category("c1").await.unwrap();

        assert!(f.store.categories().is_empty());
        assert!(f.store.goals().is_empty());
        assert!(f.store.milestones().is_empty());
        assert!(f.categories.records.lock().unwrap().is_empty());
        assert!(f.goals.records.lock().unwrap().is_empty());
        assert!(f.milestones.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleting_last_goal_resets_achievements() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", None)).await.unwrap();
        f.store.add_goal(new_goal("g2", "c1", None)).await.unwrap();
        assert!(!f.store.achievements().is_empty());

        f.store.delete_goal("g1").await.unwrap();
        // Goals remain, so badges survive.
        assert!(!f.store.achievements().is_empty());

        f.store.delete_goal("g2").await.unwrap();
        assert!(f.store.achievements().is_empty());
        assert!(f.achievements.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reset_all_clears_everything() {
        let mut f = fixture();
        f.store.add_category(new_category("c1", "Money")).await.unwrap();
        f.store.add_goal(new_goal("g1", "c1", Some(10.0))).await.unwrap();
        f.store.add_milestone(new_milestone("m1", "g1")).await.unwrap();
        f.store
            .log_progress(NewProgressLog {
                id: None,
                goal_id: "g1".to_string(),
                value: 2.0,
                note: None,
            })
            .await
            .unwrap();

        f.store.reset_all().await.unwrap();

        assert!(f.store.categories().is_empty());
        assert!(f.store.goals().is_empty());
        assert!(f.store.milestones().is_empty());
        assert!(f.store.achievements().is_empty());
        assert!(f.logs.records.lock().unwrap().is_empty());
        assert!(!f.store.is_loading());
    }

    // --- progress logging ---

    #[tokio::test]
    async fn test_log_progress_bumps_goal_through_completion_rule() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", Some(10.0))).await.unwrap();

        let goal = f
            .store
            .log_progress(NewProgressLog {
                id: None,
                goal_id: "g1".to_string(),
                value: 4.0,
                note: Some("morning run".to_string()),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(goal.current_value, 4.0);
        assert!(!goal.is_completed);
        assert_eq!(f.logs.records.lock().unwrap().len(), 1);

        let goal = f
            .store
            .log_progress(NewProgressLog {
                id: None,
                goal_id: "g1".to_string(),
                value: 6.0,
                note: None,
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(goal.current_value, 10.0);
        assert!(goal.is_completed);
        assert_eq!(f.logs.records.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_log_progress_unknown_goal_writes_nothing() {
        let mut f = fixture();
        let result = f
            .store
            .log_progress(NewProgressLog {
                id: None,
                goal_id: "ghost".to_string(),
                value: 1.0,
                note: None,
            })
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(f.logs.records.lock().unwrap().is_empty());
    }

    // --- loading ---

    #[tokio::test]
    async fn test_load_data_replaces_snapshot_wholesale() {
        let mut f = fixture();
        f.store.add_goal(new_goal("g1", "c1", None)).await.unwrap();

        // Mutate the backing collection behind the store's back and
        // reload.
        f.goals.records.lock().unwrap().clear();
        f.achievements.records.lock().unwrap().clear();
        f.store.load_data().await;

        assert!(f.store.goals().is_empty());
        assert!(f.store.achievements().is_empty());
        assert!(!f.store.is_loading());
    }

    #[tokio::test]
    async fn test_load_data_swallows_adapter_failure() {
        let goals = MockGoalRepository::default();
        let milestones = MockMilestoneRepository::default();
        let achievements = MockAchievementRepository::default();
        let logs = MockLogRepository::default();
        let sink = MockDomainEventSink::new();

        let mut store = AppStore::new(
            Arc::new(BrokenCategoryRepository),
            Arc::new(goals),
            Arc::new(milestones),
            Arc::new(achievements),
            Arc::new(logs),
            Arc::new(sink),
        );

        store.load_data().await;
        assert!(!store.is_loading());
        assert!(store.categories().is_empty());
    }

    // --- stats & export/import ---

    #[tokio::test]
    async fn test_stats_counts_target_met_goals_as_completed() {
        let mut f = fixture();
        f.store.add_category(new_category("c1", "Books")).await.unwrap();
        f.store.add_category(new_category("c2", "Idle")).await.unwrap();
        f.store.add_goal(new_goal("g1", "c1", Some(10.0))).await.unwrap();
        f.store.add_goal(new_goal("g2", "c1", None)).await.unwrap();
        f.store
            .update_goal(
                "g1",
                GoalUpdate {
                    current_value: Some(10.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stats = f.store.stats();
        assert_eq!(stats.total_goals, 2);
        assert_eq!(stats.completed_goals, 1);
        assert_eq!(stats.completion_rate, 50);
        // Empty categories are dropped from the chart data.
        assert_eq!(stats.goals_per_category.len(), 1);
        assert_eq!(stats.goals_per_category[0].count, 2);
    }

    #[tokio::test]
    async fn test_import_wipes_then_restores_verbatim() {
        let mut f = fixture();
        // Pre-existing data that must disappear.
        f.store.add_category(new_category("old", "Old")).await.unwrap();
        f.store.add_goal(new_goal("old-goal", "old", None)).await.unwrap();
        f.store.add_milestone(new_milestone("old-m", "old-goal")).await.unwrap();

        let stamp = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let make_category = |id: &str| Category {
            id: id.to_string(),
            name: format!("cat {}", id),
            icon: None,
            color: None,
            created_at: stamp,
            updated_at: stamp,
        };
        let make_goal = |id: &str| Goal {
            id: id.to_string(),
            title: format!("goal {}", id),
            description: None,
            category_id: "c1".to_string(),
            current_value: 0.0,
            target_value: None,
            unit: None,
            deadline: None,
            is_completed: false,
            created_at: stamp,
            updated_at: stamp,
        };
        let document = ExportedData::new(
            vec![make_category("c1"), make_category("c2")],
            vec![make_goal("g1"), make_goal("g2"), make_goal("g3")],
            vec![],
            vec![Achievement::unlock(AchievementId::FirstGoal, stamp)],
        );

        f.store.import_data(document).await.unwrap();

        assert_eq!(f.store.categories().len(), 2);
        assert_eq!(f.store.goals().len(), 3);
        assert!(f.store.milestones().is_empty());
        assert_eq!(f.store.achievements().len(), 1);
        // Timestamps came through verbatim, not re-stamped.
        assert_eq!(f.store.categories()[0].created_at, stamp);
        assert_eq!(f.store.goals()[0].created_at, stamp);
        assert_eq!(f.store.achievements()[0].unlocked_at, stamp);
        assert!(f.store.goal("old-goal").is_none());
    }

    #[tokio::test]
    async fn test_export_mirrors_snapshot() {
        let mut f = fixture();
        f.store.add_category(new_category("c1", "Travel")).await.unwrap();
        f.store.add_goal(new_goal("g1", "c1", None)).await.unwrap();

        let document = f.store.export_data();
        assert_eq!(document.categories.len(), 1);
        assert_eq!(document.goals.len(), 1);
        assert_eq!(document.achievements.len(), 1);
        assert_eq!(document.version, "1.0");
    }
}

use crate::models::{AppData, Category, Habit, MAX_GOAL_LEN, MAX_NAME_LEN};
use chrono::{NaiveDate, Utc};
use std::collections::BTreeSet;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("habit not found")]
    NotFound,
}

impl AppData {
    pub fn create(&mut self, name: &str, goal: &str, category: &str) -> Result<Habit, StoreError> {
        let name = validate_name(name)?;
        if self.name_taken(&name, None) {
            return Err(duplicate_name());
        }
        let goal = validate_goal(goal)?;
        let category = parse_category(category)?;

        let habit = Habit {
            id: Uuid::new_v4(),
            name,
            goal,
            category,
            created_at: Utc::now(),
            completed_dates: BTreeSet::new(),
        };
        self.habits.push(habit.clone());
        Ok(habit)
    }

    pub fn update(
        &mut self,
        id: Uuid,
        name: &str,
        goal: &str,
        category: &str,
    ) -> Result<Habit, StoreError> {
        let name = validate_name(name)?;
        let index = self
            .habits
            .iter()
            .position(|habit| habit.id == id)
            .ok_or(StoreError::NotFound)?;
        if self.name_taken(&name, Some(id)) {
            return Err(duplicate_name());
        }
        let goal = validate_goal(goal)?;
        let category = parse_category(category)?;

        let habit = &mut self.habits[index];
        habit.name = name;
        habit.goal = goal;
        habit.category = category;
        Ok(habit.clone())
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        self.habits.len() != before
    }

    pub fn toggle_completion(&mut self, id: Uuid, date: NaiveDate) -> Option<Habit> {
        let habit = self.habits.iter_mut().find(|habit| habit.id == id)?;
        habit.toggle(date);
        Some(habit.clone())
    }

    pub fn clear(&mut self) {
        self.habits.clear();
    }

    fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> bool {
        let needle = name.to_lowercase();
        self.habits
            .iter()
            .any(|habit| exclude != Some(habit.id) && habit.name.to_lowercase() == needle)
    }
}

fn validate_name(name: &str) -> Result<String, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation(
            "habit name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(StoreError::Validation(format!(
            "habit name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

fn validate_goal(goal: &str) -> Result<String, StoreError> {
    let goal = goal.trim();
    if goal.chars().count() > MAX_GOAL_LEN {
        return Err(StoreError::Validation(format!(
            "goal must be at most {MAX_GOAL_LEN} characters"
        )));
    }
    Ok(goal.to_string())
}

fn parse_category(slug: &str) -> Result<Option<Category>, StoreError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Ok(None);
    }
    Category::from_slug(slug)
        .map(Some)
        .ok_or_else(|| StoreError::Validation(format!("unknown category \"{slug}\"")))
}

fn duplicate_name() -> StoreError {
    StoreError::Validation("a habit with this name already exists".to_string())
}

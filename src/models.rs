use crate::dates::{DayEntry, ViewMode};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_GOAL_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Learning,
    Productivity,
    Mindfulness,
    Social,
    Finance,
    Other,
}

impl Category {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "health" => Some(Self::Health),
            "learning" => Some(Self::Learning),
            "productivity" => Some(Self::Productivity),
            "mindfulness" => Some(Self::Mindfulness),
            "social" => Some(Self::Social),
            "finance" => Some(Self::Finance),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Health => "Health & Fitness",
            Self::Learning => "Learning",
            Self::Productivity => "Productivity",
            Self::Mindfulness => "Mindfulness",
            Self::Social => "Social",
            Self::Finance => "Finance",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
    pub completed_dates: BTreeSet<NaiveDate>,
}

impl Habit {
    pub fn is_completed(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    pub fn toggle(&mut self, date: NaiveDate) {
        if !self.completed_dates.remove(&date) {
            self.completed_dates.insert(date);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppData {
    pub habits: Vec<Habit>,
}

#[derive(Debug, Deserialize)]
pub struct HabitRequest {
    pub name: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct TrackerQuery {
    pub view: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct HabitView {
    pub id: Uuid,
    pub name: String,
    pub goal: String,
    pub category: Option<Category>,
    pub category_label: Option<&'static str>,
    pub created_at: DateTime<Utc>,
}

impl HabitView {
    pub fn from_habit(habit: &Habit) -> Self {
        Self {
            id: habit.id,
            name: habit.name.clone(),
            goal: habit.goal.clone(),
            category: habit.category,
            category_label: habit.category.map(Category::display_name),
            created_at: habit.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

#[derive(Debug, Serialize)]
pub struct TrackedHabit {
    pub id: Uuid,
    pub name: String,
    pub goal: String,
    pub category: Option<Category>,
    pub category_label: Option<&'static str>,
    pub progress: Progress,
    pub completed: Vec<bool>,
}

#[derive(Debug, Serialize)]
pub struct TrackerResponse {
    pub view: ViewMode,
    pub reference: NaiveDate,
    pub period: String,
    pub prev: NaiveDate,
    pub next: NaiveDate,
    pub days: Vec<DayEntry>,
    pub habits: Vec<TrackedHabit>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub date: NaiveDate,
    pub completed_today: usize,
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn habit(name: &str) -> Habit {
        Habit {
            id: Uuid::new_v4(),
            name: name.to_string(),
            goal: String::new(),
            category: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, 30, 0).unwrap(),
            completed_dates: BTreeSet::new(),
        }
    }

    #[test]
    fn toggle_twice_restores_ledger() {
        let mut habit = habit("Read");
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let before = habit.completed_dates.clone();

        habit.toggle(day);
        assert!(habit.is_completed(day));
        habit.toggle(day);
        assert!(!habit.is_completed(day));
        assert_eq!(habit.completed_dates, before);
    }

    #[test]
    fn completion_is_per_calendar_day() {
        let mut habit = habit("Read");
        let morning = Utc.with_ymd_and_hms(2026, 1, 5, 6, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2026, 1, 5, 23, 59, 0).unwrap();

        habit.toggle(morning.date_naive());
        assert!(habit.is_completed(evening.date_naive()));
        assert_eq!(habit.completed_dates.len(), 1);
    }

    #[test]
    fn habit_list_round_trips_through_json() {
        let mut first = habit("Read");
        first.category = Some(Category::Learning);
        first.goal = "20 pages".to_string();
        first.toggle(NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
        first.toggle(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        let data = AppData {
            habits: vec![first, habit("Run")],
        };

        let payload = serde_json::to_string(&data).expect("serialize");
        let restored: AppData = serde_json::from_str(&payload).expect("deserialize");
        assert_eq!(restored, data);
    }

    #[test]
    fn unknown_category_fails_deserialization() {
        let payload = r#"{"habits":[{"id":"9f0c1e1e-8a3d-4e6a-9a54-0d1c6f5f7a10","name":"Read","category":"sleep","created_at":"2026-01-01T08:30:00Z","completed_dates":[]}]}"#;
        assert!(serde_json::from_str::<AppData>(payload).is_err());
    }

    #[test]
    fn category_slug_lookup_is_closed() {
        for (slug, label) in [
            ("health", "Health & Fitness"),
            ("learning", "Learning"),
            ("productivity", "Productivity"),
            ("mindfulness", "Mindfulness"),
            ("social", "Social"),
            ("finance", "Finance"),
            ("other", "Other"),
        ] {
            let category = Category::from_slug(slug).expect("known slug");
            assert_eq!(category.display_name(), label);
            assert_eq!(
                serde_json::to_string(&category).unwrap(),
                format!("\"{slug}\"")
            );
        }
        assert!(Category::from_slug("sleep").is_none());
        assert!(Category::from_slug("").is_none());
    }
}

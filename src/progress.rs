use crate::dates::DayEntry;
use crate::models::{AppData, Habit, Progress, SummaryResponse};
use chrono::{Duration, Local, NaiveDate};

const STREAK_SCAN_DAYS: i64 = 365;

pub fn progress(habit: &Habit, window: &[DayEntry]) -> Progress {
    let total = window.len();
    let completed = window
        .iter()
        .filter(|day| habit.is_completed(day.date))
        .count();
    let percentage = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    Progress {
        completed,
        total,
        percentage,
    }
}

pub fn current_streak(habits: &[Habit], today: NaiveDate) -> u32 {
    let mut streak = 0;
    for offset in 0..STREAK_SCAN_DAYS {
        let day = today - Duration::days(offset);
        let active = habits.iter().any(|habit| habit.is_completed(day));
        if active {
            streak += 1;
        } else if offset == 0 {
            // No completion today means there is no run to extend.
            return 0;
        } else {
            break;
        }
    }

    streak
}

pub fn completed_today(habits: &[Habit], today: NaiveDate) -> usize {
    habits
        .iter()
        .filter(|habit| habit.is_completed(today))
        .count()
}

pub fn build_summary(data: &AppData) -> SummaryResponse {
    build_summary_at(Local::now().date_naive(), data)
}

pub fn build_summary_at(today: NaiveDate, data: &AppData) -> SummaryResponse {
    SummaryResponse {
        date: today,
        completed_today: completed_today(&data.habits, today),
        streak: current_streak(&data.habits, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{window, ViewMode};
    use chrono::Utc;
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn habit_completed_on(days: &[NaiveDate]) -> Habit {
        Habit {
            id: Uuid::new_v4(),
            name: "Read".to_string(),
            goal: String::new(),
            category: None,
            created_at: Utc::now(),
            completed_dates: days.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn progress_counts_completed_days_in_window() {
        let reference = date(2026, 1, 7);
        let days = window(reference, ViewMode::Weekly);
        let habit = habit_completed_on(&[date(2026, 1, 5), date(2026, 1, 7), date(2026, 2, 1)]);

        let progress = progress(&habit, &days);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 7);
        assert_eq!(progress.percentage, 29);
        assert!(progress.completed <= progress.total);
        assert!(progress.percentage <= 100);
    }

    #[test]
    fn progress_on_empty_window_is_zero() {
        let habit = habit_completed_on(&[date(2026, 1, 5)]);
        let progress = progress(&habit, &[]);
        assert_eq!(progress.completed, 0);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percentage, 0);
    }

    #[test]
    fn percentage_rounds_to_nearest_integer() {
        let reference = date(2026, 1, 7);
        let days = window(reference, ViewMode::Weekly);

        // 1/7 = 14.28... rounds down, 5/7 = 71.42... rounds down, 6/7 = 85.71... rounds up.
        let one = habit_completed_on(&[date(2026, 1, 4)]);
        assert_eq!(progress(&one, &days).percentage, 14);

        let six = habit_completed_on(&[
            date(2026, 1, 4),
            date(2026, 1, 5),
            date(2026, 1, 6),
            date(2026, 1, 7),
            date(2026, 1, 8),
            date(2026, 1, 9),
        ]);
        assert_eq!(progress(&six, &days).percentage, 86);
    }

    #[test]
    fn streak_is_zero_without_habits() {
        assert_eq!(current_streak(&[], date(2026, 1, 7)), 0);
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        let today = date(2026, 1, 7);
        let habit = habit_completed_on(&[today, today - Duration::days(1)]);
        assert_eq!(current_streak(&[habit], today), 2);
    }

    #[test]
    fn streak_breaks_when_today_has_no_completion() {
        let today = date(2026, 1, 7);
        let habit = habit_completed_on(&[today - Duration::days(1), today - Duration::days(2)]);
        assert_eq!(current_streak(&[habit], today), 0);
    }

    #[test]
    fn streak_combines_completions_across_habits() {
        let today = date(2026, 1, 7);
        let first = habit_completed_on(&[today]);
        let second = habit_completed_on(&[today - Duration::days(1)]);
        assert_eq!(current_streak(&[first, second], today), 2);
    }

    #[test]
    fn streak_stops_at_the_scan_cap() {
        let today = date(2026, 1, 7);
        let days: Vec<NaiveDate> = (0..400).map(|offset| today - Duration::days(offset)).collect();
        let habit = habit_completed_on(&days);
        assert_eq!(current_streak(&[habit], today), 365);
    }

    #[test]
    fn summary_reports_todays_completions_and_streak() {
        let today = date(2026, 1, 7);
        let first = habit_completed_on(&[today, today - Duration::days(1)]);
        let second = habit_completed_on(&[today]);
        let third = habit_completed_on(&[today - Duration::days(3)]);
        let data = AppData {
            habits: vec![first, second, third],
        };

        let summary = build_summary_at(today, &data);
        assert_eq!(summary.date, today);
        assert_eq!(summary.completed_today, 2);
        assert_eq!(summary.streak, 2);
    }
}

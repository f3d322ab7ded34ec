use crate::dates::{self, DayEntry, ViewMode};
use crate::errors::AppError;
use crate::models::{
    Category, Habit, HabitRequest, HabitView, SummaryResponse, ToggleRequest, TrackedHabit,
    TrackerQuery, TrackerResponse,
};
use crate::progress::{build_summary, progress};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&build_summary(&data)))
}

pub async fn get_tracker(
    State(state): State<AppState>,
    Query(query): Query<TrackerQuery>,
) -> Result<Json<TrackerResponse>, AppError> {
    let view = match query.view.as_deref() {
        None => ViewMode::Weekly,
        Some(value) => ViewMode::parse(value)
            .ok_or_else(|| AppError::bad_request("view must be 'weekly' or 'monthly'"))?,
    };
    let reference = query.date.unwrap_or_else(|| Local::now().date_naive());
    let days = dates::window(reference, view);

    let data = state.data.lock().await;
    let habits = data
        .habits
        .iter()
        .map(|habit| tracked(habit, &days))
        .collect();

    Ok(Json(TrackerResponse {
        view,
        reference,
        period: dates::period_label(reference, view),
        prev: dates::previous(reference, view),
        next: dates::next(reference, view),
        days,
        habits,
    }))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_summary(&data)))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<HabitRequest>,
) -> Result<(StatusCode, Json<HabitView>), AppError> {
    let mut data = state.data.lock().await;
    let habit = data.create(&payload.name, &payload.goal, &payload.category)?;
    persist_data(&state.data_path, &data).await?;
    Ok((StatusCode::CREATED, Json(HabitView::from_habit(&habit))))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<HabitRequest>,
) -> Result<Json<HabitView>, AppError> {
    let mut data = state.data.lock().await;
    let habit = data.update(id, &payload.name, &payload.goal, &payload.category)?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(HabitView::from_habit(&habit)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.delete(id) {
        persist_data(&state.data_path, &data).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_completion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<HabitView>, AppError> {
    let mut data = state.data.lock().await;
    let habit = data
        .toggle_completion(id, payload.date)
        .ok_or_else(|| AppError::not_found("habit not found"))?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(HabitView::from_habit(&habit)))
}

pub async fn clear_habits(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    data.clear();
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn tracked(habit: &Habit, days: &[DayEntry]) -> TrackedHabit {
    TrackedHabit {
        id: habit.id,
        name: habit.name.clone(),
        goal: habit.goal.clone(),
        category: habit.category,
        category_label: habit.category.map(Category::display_name),
        progress: progress(habit, days),
        completed: days.iter().map(|day| habit.is_completed(day.date)).collect(),
    }
}

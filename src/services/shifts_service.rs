use diesel::prelude::*;

use crate::{
    db::models::shift::{NewShift, Shift},
    db::repositories::shifts::ShiftsRepo,
    error::AppError,
};

/// Length of a shift in minutes. Night shifts whose end time is clock-earlier
/// than their start time span midnight, so the end gets a 24h offset.
pub fn shift_duration_minutes(
    start: chrono::NaiveTime,
    end: chrono::NaiveTime,
    is_night_shift: bool,
) -> i64 {
    use chrono::Timelike;
    let start_minutes = i64::from(start.hour()) * 60 + i64::from(start.minute());
    let mut end_minutes = i64::from(end.hour()) * 60 + i64::from(end.minute());
    if is_night_shift && end < start {
        end_minutes += 24 * 60;
    }
    end_minutes - start_minutes
}

pub fn validate_shift_times(
    start: chrono::NaiveTime,
    end: chrono::NaiveTime,
    break_minutes: i32,
    is_night_shift: bool,
) -> Result<(), AppError> {
    if start >= end && !is_night_shift {
        return Err(AppError::validation(
            "Start time must be before end time, unless it's a night shift that extends to the next day",
        ));
    }

    if break_minutes < 0 {
        return Err(AppError::validation("Break duration cannot be negative"));
    }

    let duration = shift_duration_minutes(start, end, is_night_shift);
    if i64::from(break_minutes) >= duration {
        return Err(AppError::validation(
            "Break duration must be less than the total shift duration",
        ));
    }

    Ok(())
}

pub struct ShiftsService;

impl ShiftsService {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Shift>, AppError> {
        let list = ShiftsRepo::list(conn)?;
        Ok(list)
    }

    pub fn get_by_id(conn: &mut PgConnection, shift_id: i32) -> Result<Shift, AppError> {
        let shift =
            ShiftsRepo::find_by_id(conn, shift_id)?.ok_or_else(|| AppError::not_found("Shift"))?;
        Ok(shift)
    }

    pub fn create(
        conn: &mut PgConnection,
        req: &crate::routes::shifts::CreateShiftRequest,
    ) -> Result<Shift, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Shift name is required"));
        }
        validate_shift_times(
            req.start_time,
            req.end_time,
            req.break_duration,
            req.is_night_shift,
        )?;

        let new_shift = NewShift {
            name: req.name.clone(),
            start_time: req.start_time,
            end_time: req.end_time,
            break_duration: req.break_duration,
            is_night_shift: req.is_night_shift,
        };
        let created = ShiftsRepo::insert(conn, &new_shift)?;
        Ok(created)
    }

    pub fn update(
        conn: &mut PgConnection,
        shift_id: i32,
        req: &crate::routes::shifts::UpdateShiftRequest,
    ) -> Result<Shift, AppError> {
        let existing =
            ShiftsRepo::find_by_id(conn, shift_id)?.ok_or_else(|| AppError::not_found("Shift"))?;

        let name = req.name.clone().unwrap_or(existing.name);
        let start = req.start_time.unwrap_or(existing.start_time);
        let end = req.end_time.unwrap_or(existing.end_time);
        let break_minutes = req.break_duration.unwrap_or(existing.break_duration);
        let night_shift = req.is_night_shift.unwrap_or(existing.is_night_shift);

        if name.trim().is_empty() {
            return Err(AppError::validation("Shift name is required"));
        }
        validate_shift_times(start, end, break_minutes, night_shift)?;

        let updated = ShiftsRepo::update(conn, shift_id, &name, start, end, break_minutes, night_shift)?;
        Ok(updated)
    }

    pub fn delete(conn: &mut PgConnection, shift_id: i32) -> Result<(), AppError> {
        let _existing =
            ShiftsRepo::find_by_id(conn, shift_id)?.ok_or_else(|| AppError::not_found("Shift"))?;
        ShiftsRepo::delete_by_id(conn, shift_id)?;
        Ok(())
    }
}

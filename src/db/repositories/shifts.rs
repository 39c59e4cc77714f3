use diesel::prelude::*;

use crate::db::models::shift::{NewShift, Shift};

pub struct ShiftsRepo;

impl ShiftsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_shift: &NewShift,
    ) -> Result<Shift, diesel::result::Error> {
        diesel::insert_into(crate::schema::shifts::table)
            .values(new_shift)
            .get_result(conn)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<Shift>, diesel::result::Error> {
        use crate::schema::shifts::dsl::*;
        shifts.order(name.asc()).load::<Shift>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        shift_id: i32,
    ) -> Result<Option<Shift>, diesel::result::Error> {
        use crate::schema::shifts::dsl::*;
        shifts
            .filter(id.eq(shift_id))
            .first::<Shift>(conn)
            .optional()
    }

    pub fn update(
        conn: &mut PgConnection,
        shift_id: i32,
        name_val: &str,
        start: chrono::NaiveTime,
        end: chrono::NaiveTime,
        break_minutes: i32,
        night_shift: bool,
    ) -> Result<Shift, diesel::result::Error> {
        use crate::schema::shifts::dsl::*;
        diesel::update(shifts.filter(id.eq(shift_id)))
            .set((
                name.eq(name_val),
                start_time.eq(start),
                end_time.eq(end),
                break_duration.eq(break_minutes),
                is_night_shift.eq(night_shift),
                updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        shift_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::shifts::dsl::*;
        diesel::delete(shifts.filter(id.eq(shift_id))).execute(conn)
    }
}

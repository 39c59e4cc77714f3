use diesel::prelude::*;

use crate::db::enums::AttendanceStatus;
use crate::db::models::attendance::{Attendance, NewAttendance};

pub struct AttendanceRepo;

impl AttendanceRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_attendance: &NewAttendance,
    ) -> Result<Attendance, diesel::result::Error> {
        diesel::insert_into(crate::schema::attendances::table)
            .values(new_attendance)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        attendance_id: i32,
    ) -> Result<Option<Attendance>, diesel::result::Error> {
        use crate::schema::attendances::dsl::*;
        attendances
            .filter(id.eq(attendance_id))
            .first::<Attendance>(conn)
            .optional()
    }

    /// One attendance row per (staff member, assignment, date).
    pub fn find_by_key(
        conn: &mut PgConnection,
        staff_member: i32,
        assignment: i32,
        on_date: chrono::NaiveDate,
    ) -> Result<Option<Attendance>, diesel::result::Error> {
        use crate::schema::attendances::dsl::*;
        attendances
            .filter(staff_member_id.eq(staff_member))
            .filter(shift_assignment_id.eq(assignment))
            .filter(date.eq(on_date))
            .first::<Attendance>(conn)
            .optional()
    }

    pub fn list_filtered(
        conn: &mut PgConnection,
        staff_code: Option<&str>,
        wanted_status: Option<AttendanceStatus>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<Attendance>, diesel::result::Error> {
        use crate::schema::{attendances, staff_members};

        let mut query = attendances::table
            .inner_join(staff_members::table)
            .select(Attendance::as_select())
            .into_boxed();

        if let Some(staff) = staff_code {
            query = query.filter(staff_members::staff_id.eq(staff.to_string()));
        }
        if let Some(wanted) = wanted_status {
            query = query.filter(attendances::status.eq(wanted));
        }
        if let Some(from) = start_date {
            query = query.filter(attendances::date.ge(from));
        }
        if let Some(to) = end_date {
            query = query.filter(attendances::date.le(to));
        }

        query
            .order((attendances::date.desc(), attendances::staff_member_id.asc()))
            .load::<Attendance>(conn)
    }

    pub fn set_check_in(
        conn: &mut PgConnection,
        attendance_id: i32,
        at: chrono::DateTime<chrono::Utc>,
        new_status: AttendanceStatus,
    ) -> Result<Attendance, diesel::result::Error> {
        use crate::schema::attendances::dsl::*;
        diesel::update(attendances.filter(id.eq(attendance_id)))
            .set((
                check_in_time.eq(Some(at)),
                status.eq(new_status),
                updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    pub fn set_check_out(
        conn: &mut PgConnection,
        attendance_id: i32,
        at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Attendance, diesel::result::Error> {
        use crate::schema::attendances::dsl::*;
        diesel::update(attendances.filter(id.eq(attendance_id)))
            .set((check_out_time.eq(Some(at)), updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        attendance_id: i32,
        new_status: AttendanceStatus,
        new_notes: Option<&str>,
    ) -> Result<Attendance, diesel::result::Error> {
        use crate::schema::attendances::dsl::*;
        diesel::update(attendances.filter(id.eq(attendance_id)))
            .set((
                status.eq(new_status),
                notes.eq(new_notes),
                updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        attendance_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::attendances::dsl::*;
        diesel::delete(attendances.filter(id.eq(attendance_id))).execute(conn)
    }
}

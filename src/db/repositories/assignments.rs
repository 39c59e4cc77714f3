use diesel::prelude::*;

use crate::db::models::assignment::{NewShiftAssignment, ShiftAssignment, ShiftAssignmentDetail};

pub struct AssignmentsRepo;

impl AssignmentsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_assignment: &NewShiftAssignment,
    ) -> Result<ShiftAssignment, diesel::result::Error> {
        diesel::insert_into(crate::schema::shift_assignments::table)
            .values(new_assignment)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        assignment_id: i32,
    ) -> Result<Option<ShiftAssignment>, diesel::result::Error> {
        use crate::schema::shift_assignments::dsl::*;
        shift_assignments
            .filter(id.eq(assignment_id))
            .first::<ShiftAssignment>(conn)
            .optional()
    }

    pub fn list_filtered(
        conn: &mut PgConnection,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
        staff_code: Option<&str>,
        role_id: Option<i32>,
        active: Option<bool>,
    ) -> Result<Vec<ShiftAssignment>, diesel::result::Error> {
        use crate::schema::{shift_assignments, shifts, staff_members};

        let mut query = shift_assignments::table
            .inner_join(staff_members::table)
            .inner_join(shifts::table)
            .select(ShiftAssignment::as_select())
            .into_boxed();

        if let Some(from) = start_date {
            query = query.filter(shift_assignments::date.ge(from));
        }
        if let Some(to) = end_date {
            query = query.filter(shift_assignments::date.le(to));
        }
        if let Some(staff) = staff_code {
            query = query.filter(staff_members::staff_id.eq(staff.to_string()));
        }
        if let Some(role) = role_id {
            query = query.filter(staff_members::role_id.eq(role));
        }
        if let Some(active_flag) = active {
            query = query.filter(shift_assignments::is_active.eq(active_flag));
        }

        query
            .order((shift_assignments::date.asc(), shifts::start_time.asc()))
            .load::<ShiftAssignment>(conn)
    }

    /// Active assignments for a date window, joined with the display fields
    /// the schedule view needs.
    pub fn list_details_in_range(
        conn: &mut PgConnection,
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    ) -> Result<Vec<ShiftAssignmentDetail>, diesel::result::Error> {
        use crate::schema::{shift_assignments, shifts, staff_members, users};

        let rows = shift_assignments::table
            .inner_join(staff_members::table.inner_join(users::table))
            .inner_join(shifts::table)
            .filter(shift_assignments::date.ge(from))
            .filter(shift_assignments::date.le(to))
            .filter(shift_assignments::is_active.eq(true))
            .select((
                ShiftAssignment::as_select(),
                staff_members::staff_id,
                users::name,
                shifts::name,
                shifts::start_time,
                shifts::end_time,
            ))
            .order((shift_assignments::date.asc(), shifts::start_time.asc()))
            .load::<(
                ShiftAssignment,
                String,
                String,
                String,
                chrono::NaiveTime,
                chrono::NaiveTime,
            )>(conn)?;

        Ok(rows
            .into_iter()
            .map(
                |(assignment, staff_id, staff_name, shift_name, shift_start, shift_end)| {
                    ShiftAssignmentDetail {
                        assignment,
                        staff_id,
                        staff_name,
                        shift_name,
                        shift_start,
                        shift_end,
                    }
                },
            )
            .collect())
    }

    /// Does another active assignment exist for this staff member on this
    /// date? Used as the pre-check before any save that leaves a row active.
    pub fn has_active_conflict(
        conn: &mut PgConnection,
        staff_member: i32,
        on_date: chrono::NaiveDate,
        exclude_id: Option<i32>,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::shift_assignments::dsl::*;
        let mut query = shift_assignments
            .filter(staff_member_id.eq(staff_member))
            .filter(date.eq(on_date))
            .filter(is_active.eq(true))
            .select(id)
            .into_boxed();
        if let Some(excluded) = exclude_id {
            query = query.filter(id.ne(excluded));
        }
        query
            .first::<i32>(conn)
            .optional()
            .map(|found| found.is_some())
    }

    pub fn find_active_for_staff_on_date(
        conn: &mut PgConnection,
        staff_member: i32,
        on_date: chrono::NaiveDate,
    ) -> Result<Option<ShiftAssignment>, diesel::result::Error> {
        use crate::schema::shift_assignments::dsl::*;
        shift_assignments
            .filter(staff_member_id.eq(staff_member))
            .filter(date.eq(on_date))
            .filter(is_active.eq(true))
            .first::<ShiftAssignment>(conn)
            .optional()
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        assignment_id: i32,
        shift: i32,
        on_date: chrono::NaiveDate,
        active: bool,
    ) -> Result<ShiftAssignment, diesel::result::Error> {
        use crate::schema::shift_assignments::dsl::*;
        diesel::update(shift_assignments.filter(id.eq(assignment_id)))
            .set((
                shift_id.eq(shift),
                date.eq(on_date),
                is_active.eq(active),
                updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    pub fn set_shift(
        conn: &mut PgConnection,
        assignment_id: i32,
        shift: i32,
    ) -> Result<ShiftAssignment, diesel::result::Error> {
        use crate::schema::shift_assignments::dsl::*;
        diesel::update(shift_assignments.filter(id.eq(assignment_id)))
            .set((shift_id.eq(shift), updated_at.eq(chrono::Utc::now())))
            .get_result(conn)
    }

    /// Bulk-deactivate a staff member's active assignments inside an
    /// inclusive date range. Returns the number of rows touched.
    pub fn deactivate_in_range(
        conn: &mut PgConnection,
        staff_member: i32,
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::shift_assignments::dsl::*;
        diesel::update(
            shift_assignments
                .filter(staff_member_id.eq(staff_member))
                .filter(date.ge(from))
                .filter(date.le(to))
                .filter(is_active.eq(true)),
        )
        .set((is_active.eq(false), updated_at.eq(chrono::Utc::now())))
        .execute(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        assignment_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::shift_assignments::dsl::*;
        diesel::delete(shift_assignments.filter(id.eq(assignment_id))).execute(conn)
    }
}

pub mod assignments;
pub mod attendance;
pub mod departments;
pub mod leaves;
pub mod roles;
pub mod staff;
pub mod shifts;
pub mod swaps;

pub mod assignments_service;
pub mod attendance_service;
pub mod context;
pub mod departments_service;
pub mod leaves_service;
pub mod roles_service;
pub mod shifts_service;
pub mod staff_service;
pub mod swaps_service;

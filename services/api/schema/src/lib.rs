//! sea-orm entities for the liftdesk database.

pub mod attendance;
pub mod gym_images;
pub mod gym_settings;
pub mod member_workouts;
pub mod members;
pub mod membership_plans;
pub mod memberships;
pub mod payments;
pub mod progress_records;
pub mod sequence_counters;
pub mod users;
pub mod workout_plans;

use sea_orm_migration::prelude::*;

mod m20260401_000001_create_users;
mod m20260401_000002_create_members;
mod m20260401_000003_create_membership_plans;
mod m20260401_000004_create_memberships;
mod m20260401_000005_create_payments;
mod m20260401_000006_create_attendance;
mod m20260401_000007_create_workout_plans;
mod m20260401_000008_create_member_workouts;
mod m20260401_000009_create_progress_records;
mod m20260401_000010_create_gym_settings;
mod m20260401_000011_create_gym_images;
mod m20260401_000012_create_sequence_counters;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_users::Migration),
            Box::new(m20260401_000002_create_members::Migration),
            Box::new(m20260401_000003_create_membership_plans::Migration),
            Box::new(m20260401_000004_create_memberships::Migration),
            Box::new(m20260401_000005_create_payments::Migration),
            Box::new(m20260401_000006_create_attendance::Migration),
            Box::new(m20260401_000007_create_workout_plans::Migration),
            Box::new(m20260401_000008_create_member_workouts::Migration),
            Box::new(m20260401_000009_create_progress_records::Migration),
            Box::new(m20260401_000010_create_gym_settings::Migration),
            Box::new(m20260401_000011_create_gym_images::Migration),
            Box::new(m20260401_000012_create_sequence_counters::Migration),
        ]
    }
}

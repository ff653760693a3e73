mod helpers;

mod auth_flow_test;
mod membership_flow_test;
mod workout_flow_test;

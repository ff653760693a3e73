use liftdesk_api::error::ApiError;
use liftdesk_api::usecase::workout::{
    AssignWorkoutUseCase, DeleteWorkoutUseCase, OwnWorkoutUseCase,
};

use crate::helpers::{InMemoryMembers, TrackedWorkouts, ppl_template, test_member};

// ── Plan deletion keeps assignment history ───────────────────────────────────

#[tokio::test]
async fn should_keep_assignment_history_when_plan_is_deleted() {
    let mw = test_member("pass1234");
    let template = ppl_template();

    let workouts = TrackedWorkouts::new(vec![template.clone()]);
    let rows = workouts.assignments_handle();

    let assign = AssignWorkoutUseCase {
        workouts: workouts.share(),
        members: InMemoryMembers::new(vec![mw.clone()]),
    };
    assign.execute(mw.member.id, template.id).await.unwrap();

    let delete = DeleteWorkoutUseCase {
        workouts: workouts.share(),
    };
    delete.execute(template.id).await.unwrap();

    // The template is gone, but the member's assignment row survives with
    // the active flag cleared and the plan reference nulled.
    {
        let rows = rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].is_active);
        assert!(rows[0].workout_plan_id.is_none());
    }

    // The member simply has no current plan again.
    let own = OwnWorkoutUseCase {
        workouts: workouts.share(),
        members: InMemoryMembers::new(vec![mw.clone()]),
    };
    assert!(own.execute(mw.user.id).await.unwrap().is_none());

    // A second delete reports the plan as already gone.
    let again = delete.execute(template.id).await;
    assert!(matches!(again, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn should_replace_previous_assignment_on_reassign() {
    let mw = test_member("pass1234");
    let first = ppl_template();
    let mut second = ppl_template();
    second.name = "Upper Lower".to_owned();

    let workouts = TrackedWorkouts::new(vec![first.clone(), second.clone()]);
    let rows = workouts.assignments_handle();

    let assign = AssignWorkoutUseCase {
        workouts: workouts.share(),
        members: InMemoryMembers::new(vec![mw.clone()]),
    };
    assign.execute(mw.member.id, first.id).await.unwrap();
    assign.execute(mw.member.id, second.id).await.unwrap();

    {
        let rows = rows.lock().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].is_active);
        assert!(rows[1].is_active);
    }

    let own = OwnWorkoutUseCase {
        workouts: workouts.share(),
        members: InMemoryMembers::new(vec![mw.clone()]),
    };
    let current = own.execute(mw.user.id).await.unwrap().unwrap();
    assert_eq!(current.plan.id, second.id);
}

use core::future::Future;
use core::task::{Context, Poll};

use futures::pin_mut;
use futures::task::noop_waker;
use oxide_view::{drive_to_completion, MountState, Stage, StageEntry, TransitionOverride};

use super::{
    given_a_renderer_with_gated_transition, given_a_renderer_with_immediate_transition,
    given_a_renderer_without_transition, HOME_MARKUP,
};

#[test]
fn given_no_transition_when_hidden_should_clear_the_mount_in_fixed_order() {
    let (mut renderer, document, recorder) = given_a_renderer_without_transition();
    renderer.add();

    let hidden = renderer.hide(TransitionOverride::Configured);
    pin_mut!(hidden);
    let waker = noop_waker();
    let mut context = Context::from_waker(&waker);

    assert!(matches!(
        hidden.as_mut().poll(&mut context),
        Poll::Ready(Ok(()))
    ));

    let mount = document.mount();
    assert_eq!(mount.state(), MountState::Empty);
    assert_eq!(mount.markup(), "");
    // Clearing empties content only; the identifying attribute stays behind.
    assert_eq!(mount.slug(), Some("home".to_string()));

    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![
                StageEntry::at(Stage::Leave, MountState::Occupied),
                StageEntry::at(Stage::LeaveCompleted, MountState::Empty),
            ]
        );
    });
}

#[test]
fn given_an_immediate_transition_when_hidden_should_clear_only_between_transition_and_leave_completed(
) {
    let (mut renderer, document, recorder) = given_a_renderer_with_immediate_transition();
    renderer.add();

    drive_to_completion(renderer.hide(TransitionOverride::Configured)).unwrap();

    assert_eq!(document.mount().state(), MountState::Empty);
    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![
                // The exit step still observes the content; removal follows it.
                StageEntry::at(Stage::Leave, MountState::Occupied),
                StageEntry::at(Stage::TransitionHide, MountState::Occupied),
                StageEntry::at(Stage::LeaveCompleted, MountState::Empty),
            ]
        );
    });
}

#[test]
fn given_a_gated_transition_when_hidden_should_retain_content_until_release() {
    let (mut renderer, document, recorder, gate) = given_a_renderer_with_gated_transition();
    renderer.add();

    let hidden = renderer.hide(TransitionOverride::Configured);
    pin_mut!(hidden);
    let waker = noop_waker();
    let mut context = Context::from_waker(&waker);

    assert!(hidden.as_mut().poll(&mut context).is_pending());

    // The exit is still playing: content must remain installed.
    let mount = document.mount();
    assert!(mount.is_occupied());
    assert_eq!(mount.markup(), HOME_MARKUP);

    gate.release();
    assert!(matches!(
        hidden.as_mut().poll(&mut context),
        Poll::Ready(Ok(()))
    ));

    assert_eq!(mount.state(), MountState::Empty);
    assert_eq!(mount.markup(), "");
    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![
                StageEntry::at(Stage::Leave, MountState::Occupied),
                StageEntry::at(Stage::TransitionHide, MountState::Occupied),
                StageEntry::at(Stage::LeaveCompleted, MountState::Empty),
            ]
        );
    });
}

#[test]
fn given_a_suppressed_override_when_hidden_should_still_clear_the_mount() {
    let (mut renderer, document, recorder) = given_a_renderer_with_immediate_transition();
    renderer.add();

    drive_to_completion(renderer.hide(TransitionOverride::Suppressed)).unwrap();

    assert_eq!(document.mount().state(), MountState::Empty);
    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![
                StageEntry::at(Stage::Leave, MountState::Occupied),
                StageEntry::at(Stage::LeaveCompleted, MountState::Empty),
            ]
        );
    });
}

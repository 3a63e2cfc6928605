use core::future::Future;
use core::task::{Context, Poll};

use futures::pin_mut;
use futures::task::noop_waker;
use oxide_view::{
    drive_to_completion, MountState, Stage, StageEntry, StubTransition, TransitionOverride,
};

use super::{
    given_a_renderer_with_gated_transition, given_a_renderer_with_immediate_transition,
    given_a_renderer_without_transition,
};

#[test]
fn given_no_transition_when_shown_should_complete_on_first_poll_in_fixed_order() {
    let (mut renderer, document, recorder) = given_a_renderer_without_transition();
    renderer.add();

    let shown = renderer.show(TransitionOverride::Configured);
    pin_mut!(shown);
    let waker = noop_waker();
    let mut context = Context::from_waker(&waker);

    // No transition configured, so the whole sequence runs synchronously.
    assert!(matches!(
        shown.as_mut().poll(&mut context),
        Poll::Ready(Ok(()))
    ));

    assert_eq!(document.title(), "Home");
    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![
                StageEntry::at(Stage::Enter, MountState::Occupied),
                StageEntry::at(Stage::EnterCompleted, MountState::Occupied),
            ]
        );
    });
}

#[test]
fn given_an_immediate_transition_when_shown_should_complete_enter_after_the_transition() {
    let (mut renderer, document, recorder) = given_a_renderer_with_immediate_transition();
    renderer.add();

    drive_to_completion(renderer.show(TransitionOverride::Configured)).unwrap();

    assert_eq!(document.title(), "Home");
    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![
                StageEntry::at(Stage::Enter, MountState::Occupied),
                StageEntry::at(Stage::TransitionShow, MountState::Occupied),
                StageEntry::at(Stage::EnterCompleted, MountState::Occupied),
            ]
        );
    });
}

#[test]
fn given_a_gated_transition_when_shown_should_defer_enter_completed_until_release() {
    let (mut renderer, document, recorder, gate) = given_a_renderer_with_gated_transition();
    renderer.add();

    let shown = renderer.show(TransitionOverride::Configured);
    pin_mut!(shown);
    let waker = noop_waker();
    let mut context = Context::from_waker(&waker);

    assert!(shown.as_mut().poll(&mut context).is_pending());

    // The title is written and `on_enter` dispatched before suspension, but
    // nothing past the transition step has run yet.
    assert_eq!(document.title(), "Home");
    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![StageEntry::at(Stage::Enter, MountState::Occupied)]
        );
    });

    gate.release();
    assert!(matches!(
        shown.as_mut().poll(&mut context),
        Poll::Ready(Ok(()))
    ));

    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![
                StageEntry::at(Stage::Enter, MountState::Occupied),
                StageEntry::at(Stage::TransitionShow, MountState::Occupied),
                StageEntry::at(Stage::EnterCompleted, MountState::Occupied),
            ]
        );
    });
}

#[test]
fn given_a_suppressed_override_when_shown_should_skip_the_configured_transition() {
    let (mut renderer, _document, recorder) = given_a_renderer_with_immediate_transition();
    renderer.add();

    drive_to_completion(renderer.show(TransitionOverride::Suppressed)).unwrap();

    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![
                StageEntry::at(Stage::Enter, MountState::Occupied),
                StageEntry::at(Stage::EnterCompleted, MountState::Occupied),
            ]
        );
    });
}

#[test]
fn given_a_substitute_override_when_shown_should_run_the_substituted_effect() {
    let (mut renderer, document, recorder) = given_a_renderer_without_transition();
    renderer.add();

    let substitute = StubTransition::immediate(recorder.clone())
        .watching(document.mount())
        .boxed();
    drive_to_completion(renderer.show(TransitionOverride::Substitute(substitute))).unwrap();

    recorder.with_entries(|entries| {
        assert_eq!(
            entries,
            &vec![
                StageEntry::at(Stage::Enter, MountState::Occupied),
                StageEntry::at(Stage::TransitionShow, MountState::Occupied),
                StageEntry::at(Stage::EnterCompleted, MountState::Occupied),
            ]
        );
    });
}

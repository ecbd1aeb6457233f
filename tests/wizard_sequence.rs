//! Panel sequencing through the public controller API.

mod common;

use common::*;
use stepmodal::ui::wizard::{MultiPartModal, PanelDescriptor, PanelSet, WizardError};

#[test]
fn mount_open_fires_open_then_enter() {
    let recorder = Recorder::new();
    let _modal = three_step(&recorder);
    assert_eq!(recorder.calls(), vec!["open", "enter 1"]);
}

#[test]
fn mount_closed_fires_nothing() {
    let recorder = Recorder::new();
    let modal = MultiPartModal::new(
        recorded_config(&recorder, 1),
        chain(&recorder, &[1, 2, 3]),
    )
    .unwrap();
    assert!(!modal.is_open());
    assert!(recorder.calls().is_empty());
}

#[test]
fn three_advances_walk_the_chain_then_complete_once() {
    let recorder = Recorder::new();
    let mut modal = three_step(&recorder);
    recorder.clear();

    let mut seen = vec![*modal.current_panel()];
    modal.advance().unwrap();
    seen.push(*modal.current_panel());
    modal.advance().unwrap();
    seen.push(*modal.current_panel());
    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(recorder.count("complete"), 0);

    modal.advance().unwrap();
    assert!(modal.has_completed());
    assert_eq!(modal.current_panel(), &3);
    assert_eq!(
        recorder.calls(),
        vec!["leave 1", "enter 2", "leave 2", "enter 3", "leave 3", "complete"]
    );
}

#[test]
fn advance_after_completion_is_idempotent() {
    let recorder = Recorder::new();
    let mut modal = three_step(&recorder);
    for _ in 0..3 {
        modal.advance().unwrap();
    }
    let state = modal.state().clone();
    recorder.clear();

    modal.advance().unwrap();
    modal.advance().unwrap();
    assert_eq!(modal.state(), &state);
    assert!(recorder.calls().is_empty());
}

#[test]
fn blocked_panel_does_not_leave() {
    let recorder = Recorder::new();
    let mut modal = three_step(&recorder);
    modal.set_can_advance(&2, false).unwrap();
    modal.advance().unwrap();
    assert_eq!(modal.current_panel(), &2);
    recorder.clear();

    modal.advance().unwrap();
    assert_eq!(modal.current_panel(), &2);
    assert!(recorder.calls().is_empty());

    modal.set_can_advance(&2, true).unwrap();
    modal.advance().unwrap();
    assert_eq!(modal.current_panel(), &3);
    assert_eq!(recorder.calls(), vec!["leave 2", "enter 3"]);
}

#[test]
fn advance_label_follows_current_panel() {
    let panels = PanelSet::new([
        PanelDescriptor::new(1u32)
            .with_next(Some(2))
            .with_can_advance(true),
        PanelDescriptor::new(2).with_advance_label("Save Now!"),
    ])
    .unwrap();
    let mut modal = MultiPartModal::new(
        stepmodal::ui::wizard::WizardConfig::new(1).open(true),
        panels,
    )
    .unwrap();
    assert_eq!(modal.advance_label(), "Continue");
    modal.advance().unwrap();
    assert_eq!(modal.advance_label(), "Save Now!");
}

#[test]
fn dismiss_reports_without_moving() {
    let recorder = Recorder::new();
    let mut modal = three_step(&recorder);
    modal.advance().unwrap();
    recorder.clear();

    modal.dismiss().unwrap();
    assert_eq!(recorder.calls(), vec!["dismiss"]);
    assert_eq!(modal.current_panel(), &2);
    assert!(modal.is_open());
}

#[test]
fn close_keeps_state_and_reopen_resets() {
    let recorder = Recorder::new();
    let mut modal = three_step(&recorder);
    for _ in 0..3 {
        modal.advance().unwrap();
    }
    recorder.clear();

    modal.set_open(false).unwrap();
    assert_eq!(recorder.calls(), vec!["close"]);
    assert_eq!(modal.current_panel(), &3);
    assert!(modal.has_completed());

    recorder.clear();
    modal.set_open(true).unwrap();
    assert_eq!(recorder.calls(), vec!["open", "enter 1"]);
    assert_eq!(modal.current_panel(), &1);
    assert!(!modal.has_completed());
}

#[test]
fn repeated_open_flag_is_not_a_transition() {
    let recorder = Recorder::new();
    let mut modal = three_step(&recorder);
    recorder.clear();

    modal.set_open(true).unwrap();
    modal.set_open(false).unwrap();
    modal.set_open(false).unwrap();
    assert_eq!(recorder.calls(), vec!["close"]);
}

#[test]
fn interaction_while_closed_is_ignored() {
    let recorder = Recorder::new();
    let mut modal = three_step(&recorder);
    modal.set_open(false).unwrap();
    recorder.clear();

    modal.advance().unwrap();
    modal.dismiss().unwrap();
    assert!(recorder.calls().is_empty());
    assert_eq!(modal.current_panel(), &1);
}

#[test]
fn initial_panel_renders_without_enter_animation() {
    let recorder = Recorder::new();
    let modal = MultiPartModal::new(
        recorded_config(&recorder, 2).open(true),
        chain(&recorder, &[1, 2, 3]),
    )
    .unwrap();

    let views = modal.panel_views();
    let initial = views.iter().find(|view| view.key == 2).unwrap();
    assert!(initial.is_visible);
    assert!(initial.enter.is_none());
    assert!(initial.leave.is_some());

    let terminal = views.iter().find(|view| view.key == 3).unwrap();
    assert!(terminal.enter.is_some());
    assert!(terminal.leave.is_none());
}

#[test]
fn only_current_panel_is_visible() {
    let recorder = Recorder::new();
    let mut modal = three_step(&recorder);
    modal.advance().unwrap();
    let visible: Vec<u32> = modal
        .panel_views()
        .into_iter()
        .filter(|view| view.is_visible)
        .map(|view| view.key)
        .collect();
    assert_eq!(visible, vec![2]);
}

#[test]
fn acyclic_chains_always_complete_exactly_once() {
    for len in 1..=8usize {
        let recorder = Recorder::new();
        let keys: Vec<String> = (0..len).map(|i| format!("step-{}", i * 7)).collect();
        let mut modal = MultiPartModal::new(
            recorded_config(&recorder, keys[0].clone()).open(true),
            chain(&recorder, &keys),
        )
        .unwrap();

        let mut guard = 0;
        while !modal.has_completed() {
            modal.advance().unwrap();
            guard += 1;
            assert!(guard <= len, "chain of {len} did not complete");
        }
        modal.advance().unwrap();

        assert_eq!(guard, len);
        assert_eq!(modal.current_panel(), keys.last().unwrap());
        assert_eq!(recorder.count("complete"), 1);
    }
}

#[test]
fn branching_chain_follows_next_pointers_not_order() {
    let recorder = Recorder::new();
    let panels = PanelSet::new([
        recorded_panel(&recorder, "intro", Some("summary")),
        recorded_panel(&recorder, "details", None),
        recorded_panel(&recorder, "summary", Some("details")),
    ])
    .unwrap();
    let mut modal =
        MultiPartModal::new(recorded_config(&recorder, "intro").open(true), panels).unwrap();
    modal.advance().unwrap();
    assert_eq!(modal.current_panel(), &"summary");
    modal.advance().unwrap();
    assert_eq!(modal.current_panel(), &"details");
}

#[test]
fn dangling_next_pointer_is_reported() {
    let recorder = Recorder::new();
    let panels = PanelSet::new([recorded_panel(&recorder, 1u32, Some(5))]).unwrap();
    let mut modal =
        MultiPartModal::new(recorded_config(&recorder, 1).open(true), panels).unwrap();
    recorder.clear();

    let err = modal.advance().unwrap_err();
    assert_eq!(
        err,
        WizardError::MissingPanel {
            key: "5".to_string()
        }
    );
    assert_eq!(modal.current_panel(), &1);
    assert!(recorder.calls().is_empty());
}

#[test]
fn missing_initial_panel_fails_construction() {
    let recorder = Recorder::new();
    let result = MultiPartModal::new(
        recorded_config(&recorder, 9u32).open(true),
        chain(&recorder, &[1, 2]),
    );
    assert!(matches!(result, Err(WizardError::MissingPanel { .. })));
    assert!(recorder.calls().is_empty());
}

//! End-to-end generation flow: validation, paced playback, hand-off.

use std::sync::Arc;
use std::time::Duration;

use hackpack::generator::{
    narration, GenerationSequencer, GeneratorStep, NAME_TOO_SHORT_TITLE, SCRIPT_LEN,
};
use hackpack::project::ProjectStatus;
use hackpack::toast::{ToastQueue, ToastVariant};
use hackpack::GeneratorError;

use crate::integration::test_utils::{next_starter, paced_config, RecordingListener};

fn setup() -> (GenerationSequencer, ToastQueue, Arc<RecordingListener>) {
    let toasts = ToastQueue::default();
    let listener = Arc::new(RecordingListener::default());
    let sequencer =
        GenerationSequencer::new(next_starter(), paced_config(), toasts.clone(), listener.clone());
    (sequencer, toasts, listener)
}

#[tokio::test(start_paused = true)]
async fn valid_name_reaches_success_with_one_project() {
    let (sequencer, toasts, listener) = setup();
    let mut steps = sequencer.subscribe_step();
    sequencer.set_name("  My Cool App!!  ").unwrap();

    let handle = sequencer.start().unwrap();
    assert_eq!(*steps.borrow_and_update(), GeneratorStep::Generating);

    let project = handle.await.unwrap();
    assert_eq!(sequencer.step(), GeneratorStep::Success);
    assert!(steps.has_changed().unwrap());

    let projects = listener.projects.lock();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0], project);
    assert!(project.repo_url.ends_with("/my-cool-app"));
    assert_eq!(project.deploy_url, "https://my-cool-app.vercel.app");
    assert_eq!(project.status, ProjectStatus::Live);
    assert!(toasts.is_empty());
}

#[tokio::test(start_paused = true)]
async fn short_names_stay_in_config_with_one_error_toast() {
    for name in ["", "ab", "  !! ", "a!"] {
        let (sequencer, toasts, listener) = setup();
        sequencer.set_name(name).unwrap();

        let err = sequencer.start().unwrap_err();
        assert!(matches!(err, GeneratorError::NameTooShort { .. }), "name {:?}", name);
        assert_eq!(sequencer.step(), GeneratorStep::Config);
        assert!(sequencer.logs().is_empty());

        let shown = toasts.snapshot();
        assert_eq!(shown.len(), 1, "name {:?}", name);
        assert_eq!(shown[0].variant, ToastVariant::Error);
        assert_eq!(shown[0].title, NAME_TOO_SHORT_TITLE);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(listener.projects.lock().is_empty());
    }
}

#[tokio::test(start_paused = true)]
async fn log_lines_follow_script_order_and_timing() {
    let (sequencer, _, _) = setup();
    sequencer.set_name("ordered").unwrap();
    let expected = narration(sequencer.template());

    let handle = sequencer.start().unwrap();
    // Observe just after each line lands rather than on the same tick
    tokio::time::sleep(Duration::from_millis(1)).await;
    for count in 1..=SCRIPT_LEN {
        tokio::time::sleep(Duration::from_millis(800)).await;
        let logs = sequencer.logs();
        assert_eq!(logs.len(), count);
        assert_eq!(logs[..], expected[..count]);
        assert_eq!(sequencer.step(), GeneratorStep::Generating);
    }

    // The finishing delay is still pending after the last line
    tokio::time::sleep(Duration::from_millis(498)).await;
    assert_eq!(sequencer.step(), GeneratorStep::Generating);

    handle.await.unwrap();
    assert_eq!(sequencer.logs(), expected);
    assert_eq!(sequencer.step(), GeneratorStep::Success);
}

#[tokio::test(start_paused = true)]
async fn log_subscriber_sees_each_line_once() {
    let (sequencer, _, _) = setup();
    sequencer.set_name("observed").unwrap();
    let mut logs = sequencer.subscribe_logs();

    let handle = sequencer.start().unwrap();
    let mut lengths = Vec::new();
    while lengths.last() != Some(&SCRIPT_LEN) {
        logs.changed().await.unwrap();
        lengths.push(logs.borrow_and_update().len());
    }
    handle.await.unwrap();

    // The first change is the reset at start, then one per line
    let growth: Vec<usize> = lengths.into_iter().filter(|len| *len > 0).collect();
    assert_eq!(growth, (1..=SCRIPT_LEN).collect::<Vec<_>>());
}

#[tokio::test(start_paused = true)]
async fn new_run_resets_logs() {
    let (sequencer, _, listener) = setup();
    sequencer.set_name("first run").unwrap();
    sequencer.run().await.unwrap();
    assert_eq!(sequencer.logs().len(), SCRIPT_LEN);

    sequencer.reset().unwrap();
    // Logs stay visible until the next run starts
    assert_eq!(sequencer.logs().len(), SCRIPT_LEN);

    sequencer.set_name("second run").unwrap();
    let handle = sequencer.start().unwrap();
    assert!(sequencer.logs().is_empty());
    handle.await.unwrap();

    let projects = listener.projects.lock();
    assert_eq!(projects.len(), 2);
    assert_ne!(projects[0].id, projects[1].id);
    assert!(projects[1].repo_url.ends_with("/second-run"));
}

#[tokio::test(start_paused = true)]
async fn cancel_is_refused_mid_run_and_allowed_after() {
    let (sequencer, _, listener) = setup();
    sequencer.set_name("cancel me").unwrap();
    let handle = sequencer.start().unwrap();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(sequencer.cancel(), Err(GeneratorError::NotInterruptible));
    assert_eq!(sequencer.reset(), Err(GeneratorError::NotInterruptible));
    assert_eq!(listener.cancels(), 0);

    handle.await.unwrap();
    sequencer.cancel().unwrap();
    assert_eq!(listener.cancels(), 1);
}

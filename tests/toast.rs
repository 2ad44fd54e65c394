use std::time::{Duration, Instant};

use taskpad::ui::components::{Toast, ToastPhase};

fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

#[test]
fn test_phases_follow_default_timing() {
    let start = Instant::now();
    let mut toast = Toast::default();
    toast.show("Tarefa criada", start);

    assert_eq!(toast.phase(at(start, 0)), Some(ToastPhase::Entering));
    assert_eq!(toast.phase(at(start, 100)), Some(ToastPhase::Entering));
    assert_eq!(toast.phase(at(start, 300)), Some(ToastPhase::Holding));
    assert_eq!(toast.phase(at(start, 1600)), Some(ToastPhase::Holding));
    assert_eq!(toast.phase(at(start, 1700)), Some(ToastPhase::Leaving));
    assert_eq!(toast.phase(at(start, 1900)), None);
    assert_eq!(toast.total_duration(), Duration::from_millis(1900));
}

#[test]
fn test_tick_clears_after_leaving() {
    let start = Instant::now();
    let mut toast = Toast::default();
    toast.show("Tarefa criada", start);

    assert!(toast.tick(at(start, 1800)));
    assert_eq!(toast.message(), Some("Tarefa criada"));

    assert!(!toast.tick(at(start, 1900)));
    assert!(!toast.is_visible());
    assert!(toast.message().is_none());
}

#[test]
fn test_new_message_replaces_and_restarts() {
    let start = Instant::now();
    let mut toast = Toast::default();
    toast.show("Tarefa criada", start);

    let second = at(start, 1000);
    toast.show("Tarefa deletada", second);

    assert_eq!(toast.message(), Some("Tarefa deletada"));
    assert_eq!(toast.phase(second), Some(ToastPhase::Entering));
    // Past the first message's lifetime but well within the second's
    assert!(toast.tick(at(start, 2000)));
    assert_eq!(toast.phase(at(start, 2000)), Some(ToastPhase::Holding));
}

#[test]
fn test_visibility_slides_in_and_out() {
    let start = Instant::now();
    let mut toast = Toast::default();
    assert_eq!(toast.visibility(start), 0.0);

    toast.show("Tarefa atualizada", start);

    assert_eq!(toast.visibility(at(start, 0)), 0.0);
    let halfway_in = toast.visibility(at(start, 125));
    assert!((halfway_in - 0.5).abs() < 0.01, "got {}", halfway_in);
    assert_eq!(toast.visibility(at(start, 800)), 1.0);
    let halfway_out = toast.visibility(at(start, 1775));
    assert!((halfway_out - 0.5).abs() < 0.01, "got {}", halfway_out);
    assert_eq!(toast.visibility(at(start, 5000)), 0.0);
}

#[test]
fn test_custom_dwell() {
    let start = Instant::now();
    let mut toast = Toast::new(Duration::from_millis(100));
    toast.show("Erro ao criar tarefa", start);

    assert_eq!(toast.total_duration(), Duration::from_millis(600));
    assert_eq!(toast.phase(at(start, 300)), Some(ToastPhase::Holding));
    assert_eq!(toast.phase(at(start, 400)), Some(ToastPhase::Leaving));
    assert!(!toast.tick(at(start, 600)));
}

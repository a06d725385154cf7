//! Animation controller behaviour tests.

use std::time::Duration;

use glam::Vec2;
use radiant_anim::{
    AnimationConfig, AnimationController, AnimationEvent, AnimationInfo, AnimationPhase,
    AnimationType, DetailAxis, FrameTick, PhaseState,
};

fn ms(v: u64) -> FrameTick {
    FrameTick::unscaled(Duration::from_millis(v))
}

fn clockwise() -> AnimationController {
    AnimationController::new(AnimationConfig::default().with_type(AnimationType::Clockwise))
}

fn started_count(anim: &AnimationController) -> usize {
    AnimationPhase::PRIORITY
        .iter()
        .filter(|p| anim.tracker(**p).is_started())
        .count()
}

// ====================
// Defaults
// ====================

#[test]
fn test_idle_controller_reports_safe_defaults() {
    let anim = clockwise();
    assert!(anim.is_finished());
    assert!(!anim.is_ended());
    assert!(!anim.is_in_delay());
    assert_eq!(anim.current_rate(), 1.0);
    assert_eq!(anim.current_index(), None);
    assert_eq!(anim.active_phase(), None);
    assert!(!anim.check_detail_break(1000.0));
}

#[test]
fn test_disabled_controller_is_finished_and_never_starts() {
    let mut anim = AnimationController::new(
        AnimationConfig::default()
            .with_type(AnimationType::Clockwise)
            .with_enable(false),
    );
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(100));

    assert!(anim.is_finished());
    assert_eq!(anim.current_rate(), 1.0);
    assert_eq!(anim.current_index(), None);
    assert_eq!(anim.change_duration(), Duration::ZERO);
    assert_eq!(anim.addition_duration(), Duration::ZERO);
    assert!(!anim.check_detail_break(10.0));
}

#[test]
fn test_phase_durations() {
    let anim = clockwise();
    assert_eq!(anim.change_duration(), Duration::from_millis(500));
    assert_eq!(anim.addition_duration(), Duration::from_millis(500));
    assert_eq!(anim.threshold(), 2000);
    assert!(anim.exceeds_threshold(2001));
    assert!(!anim.exceeds_threshold(2000));
}

#[test]
fn test_resolve_type_only_replaces_default() {
    let mut anim = AnimationController::default();
    anim.resolve_type(AnimationType::Clockwise);
    assert_eq!(anim.kind(), AnimationType::Clockwise);
    anim.resolve_type(AnimationType::LeftToRight);
    assert_eq!(anim.kind(), AnimationType::Clockwise);
}

// ====================
// Phase selection
// ====================

#[test]
fn test_fade_in_ignored_while_fading_out() {
    let mut anim = clockwise();
    anim.start_fade_out();
    anim.start_fade_in();
    assert_eq!(anim.active_phase(), Some(AnimationPhase::FadeOut));
    assert_eq!(anim.tracker(AnimationPhase::FadeIn).state(), PhaseState::Idle);
}

#[test]
fn test_fade_out_interrupts_fade_in() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(300));
    anim.start_fade_out();
    assert_eq!(anim.active_phase(), Some(AnimationPhase::FadeOut));
    assert_eq!(started_count(&anim), 1);
}

#[test]
fn test_addition_blocked_by_fades() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.start_addition();
    assert_eq!(anim.active_phase(), Some(AnimationPhase::FadeIn));

    anim.start_fade_out();
    anim.start_addition();
    assert_eq!(anim.active_phase(), Some(AnimationPhase::FadeOut));
}

#[test]
fn test_addition_after_finished_fade_in() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 4.0);
    anim.tick(ms(1000));
    assert!(anim.is_ended());

    anim.start_addition();
    assert_eq!(anim.active_phase(), Some(AnimationPhase::Addition));
    assert_eq!(started_count(&anim), 1);

    // The reveal continues from the previous last index.
    anim.init_progress(0.0, 6.0);
    let ctx = anim.tracker(AnimationPhase::Addition).context();
    assert_eq!(ctx.curr_progress, 3.0);
    assert_eq!(ctx.dest_progress, 6.0);
}

#[test]
fn test_at_most_one_phase_started() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(2000));
    anim.start_change();
    assert_eq!(started_count(&anim), 1);
    anim.start_fade_out();
    assert_eq!(started_count(&anim), 1);
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(2000));
    assert!(anim.has_faded_out());
    anim.start_fade_in();
    assert_eq!(started_count(&anim), 1);
    assert_eq!(anim.active_phase(), Some(AnimationPhase::FadeIn));
}

#[test]
fn test_events_are_queued_and_drained() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(1000));
    assert_eq!(
        anim.drain_events(),
        vec![
            AnimationEvent::Started(AnimationPhase::FadeIn),
            AnimationEvent::Ended(AnimationPhase::FadeIn),
        ]
    );
    assert!(anim.drain_events().is_empty());
}

// ====================
// Progress
// ====================

#[test]
fn test_progress_is_monotonic_and_reaches_destination_after_delay() {
    let fade_in = AnimationInfo::default()
        .with_duration(Duration::from_millis(1000))
        .with_delay(Duration::from_millis(200));
    let mut anim = AnimationController::new(
        AnimationConfig::default()
            .with_type(AnimationType::Clockwise)
            .with_phase(AnimationPhase::FadeIn, fade_in),
    );
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    assert!(anim.is_in_delay());

    let mut last = anim.current_detail();
    let mut elapsed = 0;
    while !anim.is_finished() {
        anim.tick(ms(16));
        elapsed += 16;
        let now = anim.current_detail();
        assert!(now >= last, "progress went backwards: {last} -> {now}");
        last = now;
        assert!(elapsed < 5000, "animation never finished");
    }
    assert!(elapsed >= 1200);
    assert_eq!(anim.current_detail(), 360.0);
    assert!(anim.is_ended());
    assert_eq!(anim.current_rate(), 1.0);
}

#[test]
fn test_current_rate_is_fraction_of_domain() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(250));
    assert!((anim.current_rate() - 0.25).abs() < 1e-4);
    assert_eq!(anim.current_index(), Some(90));
}

#[test]
fn test_scaled_and_unscaled_time() {
    let frame = FrameTick::new(Duration::from_millis(400), 0.5);

    let mut scaled = clockwise();
    scaled.start_fade_in();
    scaled.init_progress(0.0, 100.0);
    scaled.tick(frame);
    assert!((scaled.current_detail() - 20.0).abs() < 1e-3);

    let mut unscaled = AnimationController::new(
        AnimationConfig::default()
            .with_type(AnimationType::Clockwise)
            .with_unscaled_time(true),
    );
    unscaled.start_fade_in();
    unscaled.init_progress(0.0, 100.0);
    unscaled.tick(frame);
    assert!((unscaled.current_detail() - 40.0).abs() < 1e-3);
}

#[test]
fn test_tick_with_total_overrides_span() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick_with_total(ms(100), 720.0);
    assert!((anim.current_detail() - 72.0).abs() < 1e-3);
}

#[test]
fn test_pause_freezes_and_resume_continues() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(500));
    let paused_at = anim.current_detail();

    anim.pause();
    assert!(anim.is_paused());
    for _ in 0..10 {
        anim.tick(ms(100));
    }
    assert_eq!(anim.current_detail(), paused_at);

    anim.resume();
    anim.tick(ms(100));
    assert!((anim.current_detail() - (paused_at + 36.0)).abs() < 1e-3);
}

#[test]
fn test_pause_also_freezes_delay() {
    let fade_in = AnimationInfo::default().with_delay(Duration::from_millis(100));
    let mut anim = AnimationController::new(
        AnimationConfig::default()
            .with_type(AnimationType::Clockwise)
            .with_phase(AnimationPhase::FadeIn, fade_in),
    );
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.pause();
    anim.tick(ms(500));
    assert!(anim.is_in_delay());
    anim.resume();
    anim.tick(ms(100));
    assert!(!anim.is_in_delay());
}

#[test]
fn test_fade_out_runs_toward_zero() {
    let mut anim = clockwise();
    anim.start_fade_out();
    anim.init_progress(0.0, 360.0);
    assert_eq!(anim.current_detail(), 360.0);
    anim.tick(ms(500));
    assert!((anim.current_detail() - 180.0).abs() < 1e-3);
    assert!(anim.check_detail_break(200.0));
    assert!(!anim.has_faded_out());
    anim.tick(ms(500));
    assert!(anim.has_faded_out());
    assert_eq!(anim.current_detail(), 0.0);
}

#[test]
fn test_reset_clears_fades() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(300));
    anim.reset();
    assert_eq!(anim.active_phase(), None);
    assert_eq!(anim.tracker(AnimationPhase::FadeIn).state(), PhaseState::Idle);
    assert!(anim.is_finished());
}

#[test]
fn test_restart_replays_active_phase_from_beginning() {
    let mut anim = clockwise();
    anim.start_change();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(250));
    assert!(anim.current_detail() > 0.0);

    anim.restart();
    assert_eq!(anim.active_phase(), Some(AnimationPhase::Change));
    assert_eq!(anim.current_detail(), 0.0);
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(250));
    assert!((anim.current_detail() - 180.0).abs() < 1e-3);
}

// ====================
// Detail breaks
// ====================

#[test]
fn test_detail_break_tracks_revealed_progress() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(500));

    assert!(!anim.check_detail_break(100.0));
    assert!(!anim.check_detail_break(180.0));
    assert!(anim.check_detail_break(181.0));

    anim.tick(ms(600));
    assert!(anim.is_finished());
    assert!(!anim.check_detail_break(359.0));
    assert!(!anim.check_detail_break(10_000.0));
}

#[test]
fn test_detail_break_ignored_for_non_index_types() {
    let mut anim = AnimationController::new(
        AnimationConfig::default().with_type(AnimationType::BottomToTop),
    );
    anim.start_fade_in();
    anim.init_progress(0.0, 1.0);
    assert!(!anim.check_detail_break(100.0));
    assert!(!anim.check_detail_break_at(Vec2::splat(100.0), DetailAxis::X));
}

#[test]
fn test_detail_break_at_position_uses_axis() {
    let mut anim =
        AnimationController::new(AnimationConfig::default().with_type(AnimationType::LeftToRight));
    anim.start_fade_in();
    let points = [Vec2::new(0.0, 0.0), Vec2::new(50.0, 80.0), Vec2::new(100.0, 10.0)];
    anim.init_progress_path(&points, DetailAxis::X);
    anim.tick(ms(500));

    assert!(!anim.check_detail_break_at(Vec2::new(40.0, 90.0), DetailAxis::X));
    assert!(anim.check_detail_break_at(Vec2::new(60.0, 0.0), DetailAxis::X));
}

#[test]
fn test_along_path_accumulates_distance() {
    let mut anim =
        AnimationController::new(AnimationConfig::default().with_type(AnimationType::AlongPath));
    anim.start_fade_in();
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(30.0, 40.0),
        Vec2::new(30.0, 0.0),
        Vec2::new(0.0, 0.0),
    ];
    anim.init_progress_path(&points, DetailAxis::X);
    let ctx = anim.tracker(AnimationPhase::FadeIn).context();
    assert_eq!(ctx.dest_progress, 120.0);

    // Half of the 120 long path is revealed.
    anim.tick(ms(500));
    assert!((anim.current_detail() - 60.0).abs() < 1e-3);

    assert!(!anim.check_detail_break_at(points[0], DetailAxis::X));
    assert!(!anim.check_detail_break_at(points[1], DetailAxis::X)); // 50
    assert!(anim.check_detail_break_at(points[2], DetailAxis::X)); // 90
}

#[test]
fn test_init_progress_path_ignores_empty_input() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress_path(&[], DetailAxis::Y);
    assert!(!anim.tracker(AnimationPhase::FadeIn).is_initialized());
}

// ====================
// Item animations
// ====================

#[test]
fn test_item_progress_and_all_items_ended() {
    let mut anim = AnimationController::new(
        AnimationConfig::default().with_type(AnimationType::BottomToTop),
    );
    anim.start_fade_in();
    anim.init_progress(0.0, 1.0);
    assert!(!anim.is_finished());

    anim.tick(ms(500));
    let (height, ended) = anim.check_item_progress(0, 40.0, 0.0);
    assert!((height - 20.0).abs() < 1e-3);
    assert!(!ended);

    anim.set_all_items_ended(true);
    anim.tick(ms(16));
    assert!(anim.is_ended());
    assert!(anim.is_finished());
    let (height, ended) = anim.check_item_progress(0, 40.0, 0.0);
    assert_eq!(height, 40.0);
    assert!(ended);
}

#[test]
fn test_item_progress_without_active_phase_is_destination() {
    let mut anim = AnimationController::new(
        AnimationConfig::default().with_type(AnimationType::InsideOut),
    );
    assert_eq!(anim.check_item_progress(3, 12.0, 0.0), (12.0, false));
}

// ====================
// Symbols and preview
// ====================

#[test]
fn test_symbol_size_follows_fades() {
    let mut anim = clockwise();
    assert_eq!(anim.symbol_size(10.0), 0.0);

    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(250));
    anim.check_symbol(10.0);
    assert!((anim.symbol_size(10.0) - 2.5).abs() < 1e-4);

    anim.tick(ms(750));
    assert!(anim.is_ended());
    assert_eq!(anim.symbol_size(10.0), 10.0);

    anim.start_fade_out();
    anim.init_progress(0.0, 360.0);
    anim.tick(ms(1000));
    assert_eq!(anim.symbol_size(10.0), 0.0);
}

#[test]
fn test_preview_reports_fully_revealed() {
    let mut anim = clockwise();
    anim.start_fade_in();
    anim.init_progress(0.0, 360.0);
    anim.set_preview(true);
    assert!(anim.is_finished());
    assert_eq!(anim.current_detail(), 360.0);
    assert_eq!(anim.current_rate(), 1.0);
    assert_eq!(anim.current_index(), None);
    assert_eq!(anim.symbol_size(6.0), 6.0);
}

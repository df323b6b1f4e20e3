//! Integration tests for the timer engine and its host runtime.
//!
//! These tests drive the public API the way a host application does:
//! - Full work/break cycles through the engine
//! - Service + clock + dispatcher wired together
//! - Notification failures and slow notifiers never stall the countdown
//! - Reconfiguration while a cycle is in progress

use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::{sleep, Duration};

use cycle_timer::host::{Clock, Dispatcher, TimerService};
use cycle_timer::notification::{MockNotifier, PermissionFlag};
use cycle_timer::{CycleConfig, Phase, RunState, TimerEngine, TimerEvent, TimerSnapshot};

// ============================================================================
// Test Helpers
// ============================================================================

/// Creates a short configuration for quick cycles.
fn create_fast_config() -> CycleConfig {
    CycleConfig::configure(3, 2, 1).unwrap()
}

/// Ticks the engine `count` times and collects every event.
fn tick_n(engine: &mut TimerEngine, count: usize) -> Vec<TimerEvent> {
    (0..count).flat_map(|_| engine.tick().1).collect()
}

/// Runs the clock and dispatcher until `driver` finishes, then shuts down.
///
/// `driver` receives its own service handle and must drop it before
/// returning so the dispatcher sees the channel close.
async fn run_host<F, Fut, T>(
    service: TimerService,
    dispatcher: Dispatcher<MockNotifier, PermissionFlag>,
    period: Duration,
    driver: F,
) -> (u64, cycle_timer::DispatchStats, T)
where
    F: FnOnce(TimerService) -> Fut,
    Fut: std::future::Future<Output = T>,
{
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let driver_service = service.clone();

    let drive = async move {
        let result = driver(driver_service).await;
        shutdown_tx.send(true).unwrap();
        result
    };

    tokio::join!(
        Clock::new(period).run(service, shutdown_rx),
        dispatcher.run(),
        drive,
    )
}

// ============================================================================
// Engine Cycles
// ============================================================================

mod engine_cycle_tests {
    use super::*;

    #[test]
    fn test_full_cycle_event_sequence() {
        let mut engine = TimerEngine::new(create_fast_config());
        engine.start(create_fast_config());
        assert_eq!(
            engine.drain_events(),
            vec![TimerEvent::PhaseStarted {
                phase: Phase::Work,
                duration_seconds: 3
            }]
        );

        let events = tick_n(&mut engine, 5);
        assert_eq!(
            events,
            vec![
                TimerEvent::NearEnd {
                    phase: Phase::Work,
                    remaining_seconds: 1
                },
                TimerEvent::PhaseEnded { phase: Phase::Work },
                TimerEvent::PhaseStarted {
                    phase: Phase::Break,
                    duration_seconds: 2
                },
                TimerEvent::NearEnd {
                    phase: Phase::Break,
                    remaining_seconds: 1
                },
                TimerEvent::PhaseEnded {
                    phase: Phase::Break
                },
                TimerEvent::PhaseStarted {
                    phase: Phase::Work,
                    duration_seconds: 3
                },
            ]
        );
        assert_eq!(
            engine.snapshot(),
            TimerSnapshot {
                phase: Phase::Work,
                state: RunState::Running,
                remaining_seconds: 3
            }
        );
    }

    #[test]
    fn test_many_cycles_keep_alternating() {
        let mut engine = TimerEngine::new(create_fast_config());
        engine.start(create_fast_config());
        engine.drain_events();

        let events = tick_n(&mut engine, 50);
        let started: Vec<Phase> = events
            .iter()
            .filter_map(|event| match event {
                TimerEvent::PhaseStarted { phase, .. } => Some(*phase),
                _ => None,
            })
            .collect();

        assert_eq!(started.len(), 20);
        for pair in started.windows(2) {
            assert_eq!(pair[1], pair[0].other());
        }
    }

    #[test]
    fn test_pause_freezes_then_resume_continues() {
        let mut engine = TimerEngine::new(create_fast_config());
        engine.start(create_fast_config());
        engine.tick();
        engine.pause();

        assert!(tick_n(&mut engine, 10).is_empty());
        assert_eq!(engine.snapshot().remaining_seconds, 2);

        engine.resume();
        let (snapshot, events) = engine.tick();
        assert_eq!(snapshot.remaining_seconds, 1);
        assert_eq!(
            events,
            vec![TimerEvent::NearEnd {
                phase: Phase::Work,
                remaining_seconds: 1
            }]
        );
    }

    #[test]
    fn test_reset_then_start_begins_fresh_work() {
        let mut engine = TimerEngine::new(create_fast_config());
        engine.start(create_fast_config());
        tick_n(&mut engine, 4);
        assert_eq!(engine.snapshot().phase, Phase::Break);

        engine.reset();
        assert_eq!(engine.snapshot(), TimerSnapshot::IDLE);

        engine.start(create_fast_config());
        assert_eq!(engine.snapshot().phase, Phase::Work);
        assert_eq!(engine.snapshot().remaining_seconds, 3);
    }

    #[test]
    fn test_deferred_config_applies_at_next_switch() {
        let config = create_fast_config().with_apply_immediately(false);
        let mut engine = TimerEngine::new(config);
        engine.start(config);
        engine.drain_events();

        let snapshot = engine.reconfigure_with(10, 6, 0).unwrap();
        assert_eq!(snapshot.remaining_seconds, 3);
        assert!(engine.pending_config().is_some());

        let events = tick_n(&mut engine, 3);
        assert_eq!(
            events.last(),
            Some(&TimerEvent::PhaseStarted {
                phase: Phase::Break,
                duration_seconds: 6
            })
        );
        assert_eq!(engine.config().work_seconds(), 10);
        assert!(engine.pending_config().is_none());
    }

    #[test]
    fn test_invalid_reconfigure_is_rejected() {
        let mut engine = TimerEngine::new(create_fast_config());
        engine.start(create_fast_config());
        engine.tick();
        let before = engine.snapshot();

        assert!(engine.reconfigure_with(0, 5, 0).is_err());
        assert!(engine.reconfigure_with(5, 5, 5).is_err());
        assert_eq!(engine.snapshot(), before);
        assert_eq!(*engine.config(), create_fast_config());
    }
}

// ============================================================================
// Host Runtime
// ============================================================================

mod host_runtime_tests {
    use super::*;

    fn create_host(
        config: CycleConfig,
        notifications: bool,
    ) -> (
        TimerService,
        Dispatcher<MockNotifier, PermissionFlag>,
        Arc<MockNotifier>,
    ) {
        let (service, events) = TimerService::new(TimerEngine::new(config));
        let notifier = Arc::new(MockNotifier::new());
        let permission = Arc::new(PermissionFlag::new(notifications));
        let dispatcher = Dispatcher::new(notifier.clone(), permission, events);
        (service, dispatcher, notifier)
    }

    #[tokio::test]
    async fn test_clock_drives_cycle_and_notifies() {
        let (service, dispatcher, notifier) = create_host(create_fast_config(), true);
        service.start().await;

        let (ticks, stats, snapshot) = run_host(
            service,
            dispatcher,
            Duration::from_millis(20),
            |service| async move {
                sleep(Duration::from_millis(150)).await;
                let snapshot = service.pause().await;
                sleep(Duration::from_millis(60)).await;
                snapshot
            },
        )
        .await;

        assert!(ticks >= 4, "expected several ticks, got {}", ticks);
        assert!(snapshot.is_paused());

        let events = notifier.get_events();
        assert_eq!(
            events.first(),
            Some(&TimerEvent::PhaseStarted {
                phase: Phase::Work,
                duration_seconds: 3
            })
        );
        assert!(events.contains(&TimerEvent::PhaseEnded { phase: Phase::Work }));
        assert_eq!(events.last(), Some(&TimerEvent::Paused));
        assert_eq!(stats.delivered as usize, events.len());
    }

    #[tokio::test]
    async fn test_disabled_notifications_do_not_stop_timer() {
        let (service, dispatcher, notifier) = create_host(create_fast_config(), false);
        service.start().await;

        let (_, stats, snapshot) = run_host(
            service,
            dispatcher,
            Duration::from_millis(20),
            |service| async move {
                sleep(Duration::from_millis(100)).await;
                service.snapshot().await
            },
        )
        .await;

        assert!(snapshot.is_running());
        assert_eq!(notifier.notification_count(), 0);
        assert_eq!(stats.delivered, 0);
        assert!(stats.suppressed >= 2);
    }

    #[tokio::test]
    async fn test_failing_notifier_does_not_stop_timer() {
        let (service, dispatcher, notifier) = create_host(create_fast_config(), true);
        notifier.set_should_fail(true);
        service.start().await;

        let (ticks, stats, snapshot) = run_host(
            service,
            dispatcher,
            Duration::from_millis(20),
            |service| async move {
                sleep(Duration::from_millis(150)).await;
                service.snapshot().await
            },
        )
        .await;

        assert!(ticks >= 4);
        assert!(snapshot.is_running());
        assert_eq!(stats.delivered, 0);
        assert!(stats.failed >= 3);
    }

    #[tokio::test]
    async fn test_slow_notifier_does_not_stall_clock() {
        let config = CycleConfig::configure(1000, 30, 0).unwrap();
        let (service, dispatcher, notifier) = create_host(config, true);
        notifier.set_delay(Duration::from_millis(300));
        service.start().await;

        let (ticks, stats, snapshot) = run_host(
            service,
            dispatcher,
            Duration::from_millis(10),
            |service| async move {
                sleep(Duration::from_millis(150)).await;
                service.snapshot().await
            },
        )
        .await;

        assert!(ticks >= 5, "clock stalled: {} ticks", ticks);
        assert!(snapshot.remaining_seconds <= 995);
        assert_eq!(stats.delivered, 1);
        assert_eq!(notifier.notification_count(), 1);
    }

    #[tokio::test]
    async fn test_reconfigure_while_running() {
        let config = CycleConfig::configure(1000, 30, 5).unwrap();
        let (service, _events) = TimerService::new(TimerEngine::new(config));
        service.start().await;
        service.tick().await;

        let snapshot = service.reconfigure(6, 4, 2).await.unwrap();
        assert_eq!(snapshot.remaining_seconds, 6);
        assert!(snapshot.is_running());

        assert!(service.reconfigure(6, 4, 4).await.is_err());
        assert_eq!(service.config().await.alert_threshold_seconds(), 2);
    }

    #[tokio::test]
    async fn test_reconfigure_while_paused_waits_for_switch() {
        let config = CycleConfig::configure(5, 3, 0).unwrap();
        let (service, _events) = TimerService::new(TimerEngine::new(config));
        service.start().await;
        service.tick().await;
        service.pause().await;

        let snapshot = service.reconfigure(20, 10, 0).await.unwrap();
        assert_eq!(snapshot.remaining_seconds, 4);
        assert!(snapshot.is_paused());

        service.resume().await;
        for _ in 0..4 {
            service.tick().await;
        }
        let snapshot = service.snapshot().await;
        assert_eq!(snapshot.phase, Phase::Break);
        assert_eq!(snapshot.remaining_seconds, 10);
    }
}

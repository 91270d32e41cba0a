//! Property-based tests for toast queue bookkeeping

use hackpack::toast::{ToastMessage, ToastQueue};
use proptest::prelude::*;
use std::time::Duration;

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

/// Dismissing any subset leaves the survivors in insertion order, and a second
/// dismissal of the same id is a no-op
#[test]
fn test_dismissal_idempotence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::collection::vec(any::<bool>(), 0..12), |dismiss_mask| {
            let runtime = paused_runtime();
            runtime.block_on(async {
                let queue = ToastQueue::with_default_duration(Duration::from_secs(60));
                let ids: Vec<_> = (0..dismiss_mask.len())
                    .map(|i| queue.push(ToastMessage::new(format!("toast {}", i))))
                    .collect();

                for (id, dismiss) in ids.iter().zip(&dismiss_mask) {
                    if *dismiss {
                        prop_assert!(queue.dismiss(*id));
                        prop_assert!(!queue.dismiss(*id));
                    }
                }

                let survivors: Vec<_> = queue.snapshot().iter().map(|t| t.id).collect();
                let expected: Vec<_> = ids
                    .iter()
                    .zip(&dismiss_mask)
                    .filter(|(_, dismiss)| !**dismiss)
                    .map(|(id, _)| *id)
                    .collect();
                prop_assert_eq!(survivors, expected);
                Ok(())
            })
        })
        .unwrap();
}

/// Every pushed toast is gone once the longest duration has elapsed
#[test]
fn test_every_toast_expires_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::collection::vec(1u64..5_000, 1..8), |durations| {
            let runtime = paused_runtime();
            runtime.block_on(async {
                let queue = ToastQueue::with_default_duration(Duration::from_millis(4000));
                for (i, ms) in durations.iter().enumerate() {
                    queue.push(
                        ToastMessage::new(format!("toast {}", i))
                            .with_duration(Duration::from_millis(*ms)),
                    );
                }
                prop_assert_eq!(queue.len(), durations.len());

                let longest = durations.iter().copied().max().unwrap_or(0);
                tokio::time::sleep(Duration::from_millis(longest + 1)).await;
                prop_assert!(queue.is_empty());
                Ok(())
            })
        })
        .unwrap();
}

use super::*;

#[test]
fn test_background_has_no_deadline() {
    let ctx = Context::background();
    assert!(ctx.deadline().is_none());
    assert!(!ctx.is_cancelled());
    assert!(ctx.err().is_none());
}

#[test]
fn test_cancel_sets_canceled_error() {
    let ctx = Context::background();
    ctx.cancel();
    assert!(matches!(ctx.err(), Some(McrError::Canceled)));
}

#[test]
fn test_parent_cancel_propagates_to_child() {
    let parent = Context::background();
    let child = parent.with_cancel();

    parent.cancel();
    assert!(child.is_cancelled());
}

#[test]
fn test_child_cancel_does_not_touch_parent() {
    let parent = Context::background();
    let child = parent.with_cancel();

    child.cancel();
    assert!(child.is_cancelled());
    assert!(!parent.is_cancelled());
}

#[test]
fn test_child_keeps_earlier_parent_deadline() {
    let parent = Context::background().with_timeout(Duration::from_secs(1));
    let child = parent.with_timeout(Duration::from_secs(60));

    assert_eq!(child.deadline(), parent.deadline());
}

#[test]
fn test_child_can_shorten_deadline() {
    let parent = Context::background().with_timeout(Duration::from_secs(60));
    let child = parent.with_timeout(Duration::from_secs(1));

    assert!(child.deadline().unwrap() < parent.deadline().unwrap());
}

#[test]
fn test_expired_deadline_reports_deadline_exceeded() {
    let ctx = Context::background().with_deadline(Instant::now());
    assert!(matches!(ctx.err(), Some(McrError::DeadlineExceeded)));
}

#[test]
fn test_cancellation_wins_over_expired_deadline() {
    let ctx = Context::background().with_deadline(Instant::now());
    ctx.cancel();
    assert!(matches!(ctx.err(), Some(McrError::Canceled)));
}

#[tokio::test]
async fn test_run_returns_exchange_result() {
    let ctx = Context::background();
    let result = ctx.run(async { Ok(42) }).await;
    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn test_run_passes_exchange_error_through() {
    let ctx = Context::background();
    let result: Result<()> = ctx.run(async { Err(McrError::transport("boom")) }).await;
    assert!(matches!(result, Err(McrError::Transport { .. })));
}

#[tokio::test]
async fn test_run_on_cancelled_context_skips_exchange() {
    let ctx = Context::background();
    ctx.cancel();

    let polled = std::sync::atomic::AtomicBool::new(false);
    let result: Result<()> = ctx
        .run(async {
            polled.store(true, std::sync::atomic::Ordering::SeqCst);
            Ok(())
        })
        .await;
    assert!(matches!(result, Err(McrError::Canceled)));
    assert!(!polled.load(std::sync::atomic::Ordering::SeqCst));
}

#[tokio::test]
async fn test_run_aborts_pending_exchange_on_cancel() {
    let ctx = Context::background();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        canceller.cancel();
    });

    let result: Result<()> = ctx.run(std::future::pending()).await;
    assert!(matches!(result, Err(McrError::Canceled)));
}

#[tokio::test]
async fn test_run_aborts_pending_exchange_on_deadline() {
    let ctx = Context::background().with_timeout(Duration::from_millis(20));

    let result: Result<()> = ctx.run(std::future::pending()).await;
    assert!(matches!(result, Err(McrError::DeadlineExceeded)));
}

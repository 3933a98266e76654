use retries::Failure;
use retries::tools::{WaitPolicy, retry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

const WAIT: Duration = Duration::from_millis(40);

fn run_exhausting(policy: WaitPolicy, attempts: u32) -> Duration {
    let start = Instant::now();

    let result = retry(|| Err::<(), _>(Failure::runtime("down")))
        .set_max_attempts(attempts)
        .set_wait_duration(WAIT)
        .set_wait_policy(policy)
        .run();

    let elapsed = start.elapsed();
    assert!(result.unwrap_err().is_exhausted());
    elapsed
}

#[test]
fn test_no_wait_after_final_attempt_by_default() {
    let elapsed = run_exhausting(WaitPolicy::BetweenAttempts, 3);

    assert!(elapsed >= WAIT * 2, "waited too little: {:?}", elapsed);
    assert!(elapsed < WAIT * 3, "waited after the final attempt: {:?}", elapsed);
}

#[test]
fn test_wait_after_every_failure() {
    let elapsed = run_exhausting(WaitPolicy::AfterEveryFailure, 3);

    assert!(elapsed >= WAIT * 3, "waited too little: {:?}", elapsed);
}

#[test]
fn test_success_does_not_wait() {
    let start = Instant::now();

    let result = retry(|| Ok::<_, Failure>(7)).set_wait_duration(WAIT).run();

    assert!(matches!(result, Ok(7)));
    assert!(start.elapsed() < WAIT, "success should not wait");
}

#[test]
fn test_interval_between_attempts() {
    let attempts = AtomicUsize::new(0);
    let mut last: Option<Instant> = None;
    let mut gaps = Vec::new();

    let result = retry(|| {
        let now = Instant::now();
        if let Some(prev) = last.replace(now) {
            gaps.push(now.duration_since(prev));
        }

        if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
            Err(Failure::runtime("fail"))
        } else {
            Ok(77)
        }
    })
    .set_wait_duration(WAIT)
    .run();

    assert!(matches!(result, Ok(77)));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert_eq!(gaps.len(), 2);
    for gap in gaps {
        assert!(gap >= WAIT, "interval between attempts too short: {:?}", gap);
    }
}

//! Example: Exhausting retries with an interval

use retries::Failure;
use retries::tools::{RunError, WaitPolicy, retry};
use std::time::Duration;

fn main() {
    let mut attempts = 0;

    let result = retry(|| {
        attempts += 1;
        println!("Attempt {}", attempts);
        Err::<(), _>(Failure::runtime(format!("fail #{attempts}")))
    })
    .set_max_attempts(3)
    .set_wait_duration(Duration::from_millis(100))
    .set_wait_policy(WaitPolicy::BetweenAttempts)
    .run();

    if let Err(RunError::Exhausted(err)) = result {
        println!("{err}");
        for failure in err.suppressed() {
            println!("  - {failure}");
        }
    }
}

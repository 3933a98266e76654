//! Example: Using the retry executor

use retries::Failure;
use retries::tools::retry;
use std::time::Duration;

fn main() {
    let mut attempts = 0;

    // Retry the operation up to 5 times
    let result = retry(|| {
        attempts += 1;
        println!("Attempt {}", attempts);
        if attempts < 3 {
            Err(Failure::runtime("Failed"))
        } else {
            Ok("Success!")
        }
    })
    .set_max_attempts(5)
    .set_wait_duration(Duration::from_millis(100))
    .run();

    println!("Result: {:?}", result);
}

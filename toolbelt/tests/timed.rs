use std::time::Duration;

use toolbelt::{check_argument, timed, Result};

#[timed]
fn add(a: u32, b: u32) -> u32 {
    a + b
}

#[timed("checked_half")]
fn half(n: u32) -> Result<u32> {
    check_argument!(n % 2 == 0, "odd input: %s", n)?;
    Ok(n / 2)
}

#[timed]
fn early_return(n: u32) -> &'static str {
    if n == 0 {
        return "zero";
    }
    "other"
}

struct Counter {
    count: u32,
}

impl Counter {
    #[timed]
    fn bump(&mut self) -> u32 {
        self.count += 1;
        self.count
    }
}

#[timed]
async fn slow(ms: u64) -> u64 {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    ms
}

#[test]
fn timed_functions_keep_their_behavior() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(early_return(0), "zero");
    assert_eq!(early_return(1), "other");
}

#[test]
fn timed_functions_propagate_errors() {
    assert_eq!(half(8), Ok(4));
    assert_eq!(
        half(7),
        Err(toolbelt::Error::IllegalArgument("odd input: 7".to_string()))
    );
}

#[test]
fn timed_methods() {
    let mut counter = Counter { count: 0 };
    counter.bump();
    assert_eq!(counter.bump(), 2);
}

#[tokio::test(start_paused = true)]
async fn timed_async_functions() {
    assert_eq!(slow(20).await, 20);
}

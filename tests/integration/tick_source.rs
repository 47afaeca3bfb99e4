//! Tick source lifecycle under virtual time.
//!
//! Verifies the scheduling contract of `tick::spawn`: the first tick lands
//! a full period after the call, ticks keep arriving while the handle
//! lives, and every way of letting go of the ticker (drop, stop, receiver
//! gone) shuts the background task down.

use std::time::Duration;

use termfocus::tick::{self, Tick};

const PERIOD: Duration = Duration::from_secs(1);

#[tokio::test(start_paused = true)]
async fn ticks_arrive_while_ticker_lives() {
    let (_ticker, mut rx) = tick::spawn(PERIOD);
    for _ in 0..5 {
        assert_eq!(rx.recv().await, Some(Tick));
    }
}

#[tokio::test(start_paused = true)]
async fn first_tick_comes_after_a_full_period() {
    let (_ticker, mut rx) = tick::spawn(PERIOD);

    // Let the ticker task start and register its timer.
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(999)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());

    tokio::time::advance(Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;
    assert_eq!(rx.try_recv().ok(), Some(Tick));
}

#[tokio::test(start_paused = true)]
async fn dropping_ticker_closes_the_channel() {
    let (ticker, mut rx) = tick::spawn(PERIOD);
    assert_eq!(rx.recv().await, Some(Tick));

    drop(ticker);

    // Aborting the task drops the sender; the receiver observes the close
    // instead of any further ticks.
    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn stop_closes_the_channel() {
    let (ticker, mut rx) = tick::spawn(PERIOD);
    assert_eq!(rx.recv().await, Some(Tick));

    ticker.stop();

    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn dropped_receiver_ends_the_task() {
    let (ticker, rx) = tick::spawn(PERIOD);
    drop(rx);

    // The task notices the failed send on its next tick and exits.
    tokio::time::advance(PERIOD).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    assert!(ticker.is_finished());
}

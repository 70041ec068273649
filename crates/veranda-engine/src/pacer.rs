// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typing/delay scheduler for bot output.
//!
//! Bot lines are queued into a single consumer task that sleeps each line's
//! delay before appending it to the transcript. Because one task drains the
//! queue in order, delivery order always equals queue order -- a later line
//! with a shorter delay can never jump ahead of an earlier one. Visitor
//! input is never routed through the pacer and is never blocked by it.
//!
//! Teardown cancels the task; a cancelled pacer appends nothing further.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::events::SessionEvent;
use crate::script::BotLine;
use crate::transcript::SharedTranscript;

/// Handle to the scheduler task. Cheap to clone; all clones feed one queue.
#[derive(Clone)]
pub struct Pacer {
    queue: mpsc::UnboundedSender<BotLine>,
    typing: Arc<AtomicBool>,
    pending: Arc<AtomicUsize>,
}

impl Pacer {
    /// Spawns the consumer task and returns the queue handle.
    ///
    /// The task exits when `cancel` fires or every handle is dropped.
    pub fn spawn(
        transcript: SharedTranscript,
        events: mpsc::UnboundedSender<SessionEvent>,
        cancel: CancellationToken,
    ) -> Self {
        let (queue, mut rx) = mpsc::unbounded_channel::<BotLine>();
        let typing = Arc::new(AtomicBool::new(false));
        let pending = Arc::new(AtomicUsize::new(0));

        let task_typing = typing.clone();
        let task_pending = pending.clone();
        tokio::spawn(async move {
            loop {
                let line = tokio::select! {
                    _ = cancel.cancelled() => break,
                    line = rx.recv() => match line {
                        Some(line) => line,
                        None => break,
                    },
                };

                if !line.delay.is_zero() {
                    task_typing.store(true, Ordering::SeqCst);
                    let _ = events.send(SessionEvent::Typing(true));
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            task_typing.store(false, Ordering::SeqCst);
                            debug!("pacer cancelled with a bot line in flight");
                            break;
                        }
                        _ = tokio::time::sleep(line.delay) => {}
                    }
                    task_typing.store(false, Ordering::SeqCst);
                    let _ = events.send(SessionEvent::Typing(false));
                }

                // A torn-down session must not gain messages.
                if cancel.is_cancelled() {
                    break;
                }

                let message = transcript.lock().await.append_bot(&line.text);
                task_pending.fetch_sub(1, Ordering::SeqCst);
                let _ = events.send(SessionEvent::Bot(message));
            }
        });

        Self {
            queue,
            typing,
            pending,
        }
    }

    /// Queues one bot line for paced delivery.
    pub fn enqueue(&self, line: BotLine) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        if self.queue.send(line).is_err() {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            trace!("pacer task gone; dropping bot line");
        }
    }

    /// Queues several lines, preserving their order.
    pub fn enqueue_all(&self, lines: Vec<BotLine>) {
        for line in lines {
            self.enqueue(line);
        }
    }

    /// Whether a delayed line is currently "being typed".
    pub fn is_typing(&self) -> bool {
        self.typing.load(Ordering::SeqCst)
    }

    /// Number of queued lines not yet appended to the transcript.
    pub fn pending_lines(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::transcript;

    async fn next_bot(rx: &mut mpsc::UnboundedReceiver<SessionEvent>) -> String {
        loop {
            match rx.recv().await.expect("event stream open") {
                SessionEvent::Bot(msg) => return msg.text,
                _ => continue,
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn staggered_lines_land_in_scheduling_order() {
        let log = transcript::shared();
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let pacer = Pacer::spawn(log.clone(), events_tx, cancel.clone());

        log.lock().await.append_visitor("hello");
        pacer.enqueue(BotLine::new("first", Duration::from_millis(1000)));
        pacer.enqueue(BotLine::new("second", Duration::from_millis(2500)));
        pacer.enqueue(BotLine::new("third", Duration::from_millis(4000)));

        assert_eq!(next_bot(&mut events_rx).await, "first");
        assert_eq!(next_bot(&mut events_rx).await, "second");
        assert_eq!(next_bot(&mut events_rx).await, "third");

        let texts: Vec<String> = log
            .lock()
            .await
            .messages()
            .iter()
            .map(|m| m.text.clone())
            .collect();
        assert_eq!(texts, ["hello", "first", "second", "third"]);
        assert_eq!(pacer.pending_lines(), 0);
        cancel.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn shorter_delay_never_jumps_ahead() {
        let log = transcript::shared();
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let pacer = Pacer::spawn(log.clone(), events_tx, cancel.clone());

        pacer.enqueue(BotLine::new("slow", Duration::from_millis(5000)));
        pacer.enqueue(BotLine::new("fast", Duration::from_millis(10)));

        assert_eq!(next_bot(&mut events_rx).await, "slow");
        assert_eq!(next_bot(&mut events_rx).await, "fast");
        cancel.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn typing_indicator_tracks_delayed_lines() {
        let log = transcript::shared();
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let pacer = Pacer::spawn(log, events_tx, cancel.clone());

        pacer.enqueue(BotLine::new("paced", Duration::from_millis(1000)));

        let mut saw_typing_on = false;
        loop {
            match events_rx.recv().await.expect("event stream open") {
                SessionEvent::Typing(true) => saw_typing_on = true,
                SessionEvent::Bot(_) => break,
                _ => continue,
            }
        }
        assert!(saw_typing_on, "typing indicator should assert during the delay");
        assert!(!pacer.is_typing());
        cancel.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_drops_pending_lines() {
        let log = transcript::shared();
        let (events_tx, _events_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let pacer = Pacer::spawn(log.clone(), events_tx, cancel.clone());

        pacer.enqueue(BotLine::new("never delivered", Duration::from_millis(2000)));
        cancel.cancel();

        // Give the cancelled task ample simulated time to misbehave.
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(log.lock().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_lines_skip_the_typing_indicator() {
        let log = transcript::shared();
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let pacer = Pacer::spawn(log, events_tx, cancel.clone());

        pacer.enqueue(BotLine::immediate("now"));

        match events_rx.recv().await.expect("event stream open") {
            SessionEvent::Bot(msg) => assert_eq!(msg.text, "now"),
            other => panic!("expected Bot first, got {other:?}"),
        }
        cancel.cancel();
    }
}

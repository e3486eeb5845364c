//! Terminal countdown shown while the labeller is given time to work.

use std::io::Write;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

/// Whole seconds left until `deadline`, rounded up.
fn seconds_left(deadline: Instant, now: Instant) -> u64 {
    let left = deadline.saturating_duration_since(now);
    left.as_secs() + u64::from(left.subsec_nanos() > 0)
}

/// A countdown spinner on stderr. Purely cosmetic: it never decides when the
/// wait ends.
pub struct Countdown {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl Countdown {
    pub fn start(message: &str, total: Duration) -> Self {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let message = message.to_string();
        let deadline = Instant::now() + total;

        let handle = tokio::spawn(async move {
            let mut i = 0;
            loop {
                let frame = FRAMES[i % FRAMES.len()];
                let left = seconds_left(deadline, Instant::now());
                eprint!("\x1b[2K\r{frame} {message} ({left}s)");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
                i += 1;
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// Stop the countdown and clear its line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}

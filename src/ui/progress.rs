//! Cosmetic install animation.
//!
//! A fixed-width bar with a filled segment bouncing left and right, redrawn
//! in place while the installer subprocess runs. The worker thread has no
//! knowledge of real install progress; it only stops when signaled.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::AnimationHandle;

/// Total bar width in columns.
const BAR_WIDTH: usize = 40;
/// Width of the moving filled segment.
const SEGMENT_WIDTH: usize = 10;
/// Redraw interval.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Background worker drawing the bouncing install bar.
///
/// The worker redraws over the same line with a carriage return until
/// [`InstallAnimation::finish`] sets the stop flag; it then draws the
/// completed bar itself and exits. `finish` joins the worker, and `Drop`
/// calls it as a backstop, so the thread cannot outlive the install step.
pub struct InstallAnimation {
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl InstallAnimation {
    /// Spawn the animation worker for a package.
    pub fn start(package: &str) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let label = format!("Installing {}", package);
        let worker = thread::spawn(move || draw_loop(&label, &flag));

        Self {
            stop,
            worker: Some(worker),
        }
    }

    /// Signal the worker to stop and wait for it to exit. Idempotent.
    pub fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    /// Whether the worker has been joined.
    pub fn is_finished(&self) -> bool {
        self.worker.is_none()
    }
}

impl AnimationHandle for InstallAnimation {
    fn finish(&mut self) {
        InstallAnimation::finish(self);
    }
}

impl Drop for InstallAnimation {
    fn drop(&mut self) {
        self.finish();
    }
}

fn draw_loop(label: &str, stop: &AtomicBool) {
    let mut position: isize = 0;
    let mut direction: isize = 1;

    while !stop.load(Ordering::Relaxed) {
        position += direction;

        // Bounce at either edge.
        if position as usize >= BAR_WIDTH - SEGMENT_WIDTH || position <= 0 {
            direction = -direction;
        }

        let offset = position as usize;
        let bar = format!(
            "[{}{}{}]",
            " ".repeat(offset),
            "#".repeat(SEGMENT_WIDTH),
            " ".repeat(BAR_WIDTH - offset - SEGMENT_WIDTH)
        );
        print!("\r{}: {}", label, bar);
        let _ = io::stdout().flush();
        thread::sleep(FRAME_INTERVAL);
    }

    // The worker draws the final frame itself so the bar never ends mid-bounce.
    println!("\r{}: [{}] Complete!", label, "#".repeat(BAR_WIDTH));
    let _ = io::stdout().flush();
}

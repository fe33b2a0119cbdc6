//! The project showcase carousel: a wrap-around slide index plus an
//! auto-advance loop the shell spawns and aborts. The index never owns a
//! timer itself.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

/// Slides rotate at this period unless the viewer intervenes
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(8);

#[derive(Debug)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// `len` is the number of slides; a carousel needs at least one
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a carousel needs at least one slide");
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize { self.current }

    pub fn slide_count(&self) -> usize { self.len }

    /// Next slide, wrapping to the first
    pub fn advance(&mut self) { self.current = (self.current + 1) % self.len; }

    /// Previous slide, wrapping to the last
    pub fn retreat(&mut self) { self.current = (self.current + self.len - 1) % self.len; }

    /// Jump straight to a dot's slide; out-of-range requests are ignored
    pub fn go_to(
        &mut self,
        slide: usize,
    ) {
        if slide < self.len {
            self.current = slide;
        }
    }
}

/// Repeating auto-advance tick. The shell `tokio::spawn`s this and keeps the
/// `JoinHandle`; aborting the handle cancels the rotation (say, when the
/// viewer grabs a slide). The lock is only held for the increment, never
/// across an await.
pub async fn auto_advance(
    carousel: Arc<Mutex<Carousel>>,
    period: Duration,
) {
    let mut interval = tokio::time::interval(period);
    // the first tick of `interval` fires immediately; consume it so the
    // opening slide gets a full period on screen
    interval.tick().await;
    loop {
        interval.tick().await;
        carousel.lock().unwrap().advance();
    }
}

//! Millisecond timers driven by the tick count the frontend passes in

/// Stopwatch that can be paused
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer {
    start_ticks: u64,
    paused_ticks: u64,
    started: bool,
    paused: bool,
}

impl Timer {
    pub fn new() -> Timer {
        Timer::default()
    }

    pub fn start(&mut self, now: u64) {
        self.started = true;
        self.paused = false;
        self.start_ticks = now;
        self.paused_ticks = 0;
    }

    pub fn stop(&mut self) {
        *self = Timer::default();
    }

    pub fn pause(&mut self, now: u64) {
        if self.started && !self.paused {
            self.paused = true;
            self.paused_ticks = now.saturating_sub(self.start_ticks);
            self.start_ticks = 0;
        }
    }

    pub fn resume(&mut self, now: u64) {
        if self.started && self.paused {
            self.paused = false;
            self.start_ticks = now.saturating_sub(self.paused_ticks);
            self.paused_ticks = 0;
        }
    }

    /// Milliseconds elapsed since `start`, not counting paused time
    pub fn ticks(&self, now: u64) -> u64 {
        match (self.started, self.paused) {
            (false, _) => 0,
            (true, true) => self.paused_ticks,
            (true, false) => now.saturating_sub(self.start_ticks),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused && self.started
    }
}

/// Average frame rate since the counter was created
#[derive(Clone, Copy, Debug)]
pub struct FpsCounter {
    timer: Timer,
    frames: u64,
}

impl FpsCounter {
    pub fn new(now: u64) -> FpsCounter {
        let mut timer = Timer::new();
        timer.start(now);

        FpsCounter { timer, frames: 0 }
    }

    pub fn frame_rendered(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn average(&self, now: u64) -> f32 {
        let secs = self.timer.ticks(now) as f32 / 1000.;
        if secs <= 0. {
            0.
        } else {
            self.frames as f32 / secs
        }
    }
}

/// Per frame time budget for a capped frame rate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCap {
    ticks_per_frame: u64,
}

impl FrameCap {
    pub fn new(fps: u32) -> FrameCap {
        FrameCap {
            ticks_per_frame: 1000 / u64::from(fps.max(1)),
        }
    }

    pub fn ticks_per_frame(&self) -> u64 {
        self.ticks_per_frame
    }

    /// How long to sleep after a frame that took `frame_ticks` to produce
    pub fn delay(&self, frame_ticks: u64) -> u64 {
        self.ticks_per_frame.saturating_sub(frame_ticks)
    }
}

pub type TimerId = u32;

/// Called when a timer expires. Returns the next interval in milliseconds, 0 removes the timer.
pub type TimerCallback = Box<dyn FnMut(u64) -> u64>;

struct PendingTimer {
    id: TimerId,
    deadline: u64,
    callback: TimerCallback,
}

/// Callback timers fired from the main loop instead of a background thread
#[derive(Default)]
pub struct TimerQueue {
    timers: Vec<PendingTimer>,
    next_id: TimerId,
}

impl TimerQueue {
    pub fn new() -> TimerQueue {
        TimerQueue::default()
    }

    pub fn add<F>(&mut self, now: u64, interval: u64, callback: F) -> TimerId
    where
        F: FnMut(u64) -> u64 + 'static,
    {
        self.next_id += 1;
        let id = self.next_id;

        self.timers.push(PendingTimer {
            id,
            deadline: now.saturating_add(interval),
            callback: Box::new(callback),
        });

        id
    }

    /// Returns false if no such timer was pending
    pub fn remove(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Fire every timer whose deadline has passed. Returns the number of callbacks run.
    pub fn poll(&mut self, now: u64) -> usize {
        let mut fired = 0;

        self.timers.retain_mut(|t| {
            if t.deadline > now {
                return true;
            }

            fired += 1;
            match (t.callback)(now) {
                0 => false,
                next => {
                    t.deadline = now.saturating_add(next);
                    true
                }
            }
        });

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn pause_excludes_paused_time() {
        let mut t = Timer::new();
        assert_eq!(t.ticks(500), 0);

        t.start(1000);
        assert_eq!(t.ticks(1500), 500);
        t.pause(1500);
        assert!(t.is_paused());
        assert_eq!(t.ticks(9000), 500);
        t.resume(9000);
        assert_eq!(t.ticks(9100), 600);

        t.stop();
        assert!(!t.is_started());
        assert_eq!(t.ticks(10000), 0);
    }

    #[test]
    fn fps_before_any_time_passed() {
        let mut fps = FpsCounter::new(100);
        fps.frame_rendered();
        assert_eq!(fps.average(100), 0.);
        assert_eq!(fps.average(1100), 1.);
    }

    #[test]
    fn frame_cap_budget() {
        let cap = FrameCap::new(60);
        assert_eq!(cap.ticks_per_frame(), 16);
        assert_eq!(cap.delay(10), 6);
        assert_eq!(cap.delay(20), 0);
    }

    #[test]
    fn one_shot_and_repeating_timers() {
        let count = Rc::new(Cell::new(0));
        let mut q = TimerQueue::new();

        let c = count.clone();
        q.add(0, 3000, move |_| {
            c.set(c.get() + 1);
            0
        });
        let c = count.clone();
        let repeating = q.add(0, 100, move |_| {
            c.set(c.get() + 10);
            100
        });

        assert_eq!(q.poll(99), 0);
        assert_eq!(q.poll(100), 1);
        assert_eq!(q.poll(3000), 2);
        assert_eq!(count.get(), 21);
        assert_eq!(q.len(), 1);

        assert!(q.remove(repeating));
        assert!(!q.remove(repeating));
        assert!(q.is_empty());
    }

    #[test]
    fn huge_intervals_never_fire() {
        let mut timers = TimerQueue::new();
        let count = Rc::new(Cell::new(0));

        let c = Rc::clone(&count);
        timers.add(1000, u64::MAX, move |_| {
            c.set(c.get() + 1);
            0
        });
        assert_eq!(timers.poll(u64::MAX - 1), 0);

        let c = Rc::clone(&count);
        timers.add(0, 10, move |_| {
            c.set(c.get() + 1);
            u64::MAX
        });
        assert_eq!(timers.poll(10), 1);
        assert_eq!(timers.poll(u64::MAX - 1), 0);
        assert_eq!(count.get(), 1);
        assert_eq!(timers.len(), 2);
    }
}

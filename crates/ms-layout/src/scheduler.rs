// ABOUTME: Coalesces layout requests into at most one pending pass.
// ABOUTME: Also carries the one-shot flags consumed by the next pass.

/// Bookkeeping for deferred layout passes.
///
/// The pending flag is cleared at the start of a pass, not the end, so a
/// request raised while a pass is running schedules a fresh one.
#[derive(Debug, Default)]
pub struct LayoutScheduler {
    pending: bool,
    resize_notification: bool,
    style_update: bool,
}

impl LayoutScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a pass as wanted. Returns true if the caller must hand it to the host.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn begin_pass(&mut self) {
        self.pending = false;
    }

    pub fn request_resize_notification(&mut self) {
        self.resize_notification = true;
    }

    pub fn take_resize_notification(&mut self) -> bool {
        std::mem::take(&mut self.resize_notification)
    }

    pub fn request_style_update(&mut self) {
        self.style_update = true;
    }

    pub fn take_style_update(&mut self) -> bool {
        std::mem::take(&mut self.style_update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_requests_coalesce() {
        let mut scheduler = LayoutScheduler::new();
        assert!(scheduler.request());
        assert!(!scheduler.request());
        assert!(!scheduler.request());
        assert!(scheduler.is_pending());
    }

    #[test]
    fn test_request_during_pass_is_not_dropped() {
        let mut scheduler = LayoutScheduler::new();
        scheduler.request();
        scheduler.begin_pass();
        assert!(!scheduler.is_pending());
        assert!(scheduler.request());
    }

    #[test]
    fn test_one_shot_flags_clear_when_taken() {
        let mut scheduler = LayoutScheduler::new();
        scheduler.request_resize_notification();
        scheduler.request_style_update();
        assert!(scheduler.take_resize_notification());
        assert!(!scheduler.take_resize_notification());
        assert!(scheduler.take_style_update());
        assert!(!scheduler.take_style_update());
    }
}

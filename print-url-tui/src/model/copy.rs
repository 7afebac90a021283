//! “已复制”提示状态

use std::time::{Duration, Instant};

/// 复制成功后短暂显示“已复制”，超时后恢复
///
/// 以最后一次复制的时间为准，连续复制会重新计时。
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    copied_at: Option<Instant>,
    timeout: Duration,
}

impl CopyIndicator {
    pub fn new(timeout: Duration) -> Self {
        Self {
            copied_at: None,
            timeout,
        }
    }

    /// 记录一次成功的复制
    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    /// 是否处于“已复制”状态
    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some()
    }

    /// 推进计时，超时则复位；返回状态是否发生变化
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) >= self.timeout => {
                self.copied_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.copied_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(2500);

    #[test]
    fn test_expires_after_timeout() {
        let start = Instant::now();
        let mut indicator = CopyIndicator::new(TIMEOUT);
        indicator.mark(start);

        assert!(!indicator.tick(start + Duration::from_millis(2499)));
        assert!(indicator.is_copied());
        assert!(indicator.tick(start + TIMEOUT));
        assert!(!indicator.is_copied());
    }

    #[test]
    fn test_new_copy_restarts_timer() {
        let start = Instant::now();
        let mut indicator = CopyIndicator::new(TIMEOUT);
        indicator.mark(start);
        indicator.mark(start + Duration::from_secs(2));

        assert!(!indicator.tick(start + Duration::from_secs(3)));
        assert!(indicator.is_copied());
        assert!(indicator.tick(start + Duration::from_millis(4500)));
    }

    #[test]
    fn test_tick_when_idle_is_noop() {
        let mut indicator = CopyIndicator::new(TIMEOUT);
        assert!(!indicator.tick(Instant::now()));
        assert!(!indicator.is_copied());
    }
}

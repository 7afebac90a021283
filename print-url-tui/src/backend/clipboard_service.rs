//! 剪贴板服务

use anyhow::{Context, Result};

/// 剪贴板服务 trait
pub trait ClipboardService {
    /// 写入文本
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// 系统剪贴板，首次复制时才连接
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }
}

impl ClipboardService for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("Clipboard is unavailable")?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_string())
            .context("Failed to write to clipboard")
    }
}

/// 内存剪贴板（测试用），可设置为始终失败
#[cfg(test)]
#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    pub fail: bool,
}

#[cfg(test)]
impl ClipboardService for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("clipboard disabled");
        }
        self.contents.borrow_mut().push(text.to_string());
        Ok(())
    }
}

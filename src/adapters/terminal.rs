use crate::domain::ports::{EventSource, RenderTarget};
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// 直接輸出到終端機
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTarget;

impl RenderTarget for StdoutTarget {
    fn render(&self, frame: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", frame);
    }

    fn prompt(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "{}", text);
        let _ = stdout.flush();
    }

    fn alert(&self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "⚠️  {}", message);
    }
}

/// 從 stdin 逐行讀取使用者輸入
pub struct StdinEvents {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinEvents {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSource for StdinEvents {
    async fn next_line(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                None
            }
        }
    }
}

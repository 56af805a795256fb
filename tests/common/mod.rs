#![allow(dead_code)]

use async_trait::async_trait;
use contact_manager::core::{EventSource, RenderTarget};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// 收集所有輸出，方便斷言
#[derive(Default)]
pub struct CaptureTarget {
    frames: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl CaptureTarget {
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last_frame(&self) -> String {
        self.frames().last().cloned().unwrap_or_default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl RenderTarget for CaptureTarget {
    fn render(&self, frame: &str) {
        self.frames.lock().unwrap().push(frame.to_string());
    }

    fn prompt(&self, text: &str) {
        self.prompts.lock().unwrap().push(text.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// 依序回放預先寫好的輸入
pub struct ScriptedEvents {
    lines: VecDeque<String>,
}

impl ScriptedEvents {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }
}

#[async_trait]
impl EventSource for ScriptedEvents {
    async fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

pub fn seed_contacts() -> Value {
    json!([
        {
            "id": 1,
            "full_name": "Chase Philpot",
            "email": "philpotc@yahoo.com",
            "phone_number": "1238675309",
            "tags": "LS,Student,Spot Lead"
        },
        {
            "id": 2,
            "full_name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone_number": "5551234567",
            "tags": "TA,LS"
        },
        {
            "id": 3,
            "full_name": "Grace Hopper",
            "email": "grace@example.com",
            "phone_number": "5559876543",
            "tags": null
        }
    ])
}

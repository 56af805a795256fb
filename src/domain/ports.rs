use crate::domain::model::{ContactId, ContactPayload, ContactRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 遠端聯絡人 API
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn list(&self) -> Result<Vec<ContactRecord>>;
    async fn create(&self, payload: &ContactPayload) -> Result<ContactRecord>;
    async fn update(&self, id: ContactId, payload: &ContactPayload) -> Result<ContactRecord>;
    async fn delete(&self, id: ContactId) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn contacts_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn tag_hint_delay(&self) -> Duration;
    fn field_hint_delay(&self) -> Duration;
}

/// 畫面輸出目標。Presenter 只透過這裡輸出
pub trait RenderTarget: Send + Sync + 'static {
    fn render(&self, frame: &str);
    fn prompt(&self, text: &str);
    fn alert(&self, message: &str);
}

/// 使用者輸入事件來源，一次一行
#[async_trait]
pub trait EventSource: Send {
    async fn next_line(&mut self) -> Option<String>;
}

use crate::utils::error::{ContactError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 伺服器指派的聯絡人識別碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// 無法解析的識別碼一律視為找不到
    pub fn parse(raw: &str) -> Result<Self> {
        raw.parse()
    }
}

impl FromStr for ContactId {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ContactError::not_found(s))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub tags: Vec<String>,
}

/// API 回傳的原始聯絡人格式，tags 為逗號分隔字串
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: ContactId,
    pub full_name: String,
    pub email: String,
    #[serde(deserialize_with = "string_or_number")]
    pub phone_number: String,
    #[serde(default)]
    pub tags: Option<String>,
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name,
            email: record.email,
            phone_number: record.phone_number,
            tags: split_tags(record.tags.as_deref()),
        }
    }
}

/// POST / PUT 的 request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub tags: String,
}

/// 表單送出的資料
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub selected_tags: Vec<String>,
    pub new_tag: Option<String>,
}

impl ContactInput {
    pub fn to_payload(&self) -> ContactPayload {
        let mut tags = self.selected_tags.join(",");

        if let Some(new_tag) = self.new_tag.as_deref().filter(|t| !t.is_empty()) {
            if !tags.is_empty() {
                tags.push(',');
            }
            tags.push_str(new_tag);
        }

        ContactPayload {
            id: None,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            tags,
        }
    }

    pub fn to_payload_with_id(&self, id: ContactId) -> ContactPayload {
        ContactPayload {
            id: Some(id),
            ..self.to_payload()
        }
    }
}

/// 繪製新增 / 編輯表單所需的資料
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormContext {
    pub id: Option<ContactId>,
    pub header: &'static str,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub known_tags: Vec<String>,
    pub preselected_tags: Vec<String>,
}

impl FormContext {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

/// 空字串或缺少欄位代表沒有 tag；其餘照逗號切開，不做 trim
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(s) if !s.is_empty() => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number for phone_number, got {}",
            other
        ))),
    }
}

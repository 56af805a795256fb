use crate::domain::model::Contact;
use std::collections::HashSet;

/// 所有聯絡人的 tag 去重後的集合，保留第一次出現的順序
pub fn derive_tags(contacts: &[Contact]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tags = Vec::new();

    for tag in contacts.iter().flat_map(|contact| &contact.tags) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }

    tags
}

/// 整段查詢字串可以解析為有限數字時，改用電話號碼前綴比對
pub fn is_numeric_query(query: &str) -> bool {
    query
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite())
        .unwrap_or(false)
}

/// 以空白切出 (first, last)；只有一個字的姓名沒有 last
pub fn split_name(full_name: &str) -> (&str, Option<&str>) {
    let mut parts = full_name.split(' ');
    let first = parts.next().unwrap_or("");
    (first, parts.next())
}

pub fn matches_search(contact: &Contact, query: &str) -> bool {
    let query = query.to_lowercase();

    if is_numeric_query(&query) {
        return contact.phone_number.starts_with(&query);
    }

    let name = contact.full_name.to_lowercase();
    let (first, last) = split_name(&name);

    first.starts_with(&query)
        || last.is_some_and(|last| last.starts_with(&query))
        || contact.email.to_lowercase().contains(&query)
        || contact
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().starts_with(&query))
}

pub fn matches_tag(contact: &Contact, tag: &str) -> bool {
    let tag = tag.to_lowercase();
    contact.tags.iter().any(|t| t.to_lowercase() == tag)
}

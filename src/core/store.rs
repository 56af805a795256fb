use crate::core::matching::{derive_tags, matches_search, matches_tag};
use crate::domain::model::{Contact, ContactId, ContactInput, FormContext};
use crate::domain::ports::ContactApi;
use crate::utils::error::{ContactError, Result};

/// 本地聯絡人快取，唯一的資料擁有者。
///
/// 所有變更都要等遠端成功回應後才寫入本地；失敗時本地狀態保持不變。
pub struct ContactStore<A: ContactApi> {
    api: A,
    contacts: Vec<Contact>,
    tags: Vec<String>,
}

impl<A: ContactApi> ContactStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            contacts: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn find(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub async fn fetch_all(&mut self) -> Result<()> {
        let records = self.api.list().await?;
        self.contacts = records.into_iter().map(Contact::from).collect();
        tracing::debug!("Fetched {} contacts", self.contacts.len());
        Ok(())
    }

    pub async fn add(&mut self, input: &ContactInput) -> Result<&Contact> {
        let record = self.api.create(&input.to_payload()).await?;
        tracing::debug!("Created contact {}", record.id);
        self.contacts.push(Contact::from(record));
        Ok(&self.contacts[self.contacts.len() - 1])
    }

    pub async fn edit(&mut self, id: ContactId, input: &ContactInput) -> Result<()> {
        let record = self.api.update(id, &input.to_payload_with_id(id)).await?;
        let updated = Contact::from(record);

        match self.contacts.iter_mut().find(|contact| contact.id == updated.id) {
            Some(slot) => *slot = updated,
            None => tracing::warn!(
                "Updated contact {} is not in the local collection; run refresh to resync",
                updated.id
            ),
        }
        Ok(())
    }

    pub async fn delete(&mut self, id: ContactId) -> Result<()> {
        self.api.delete(id).await?;
        self.contacts.retain(|contact| contact.id != id);
        tracing::debug!("Deleted contact {}", id);
        Ok(())
    }

    pub fn recompute_tags(&mut self) {
        self.tags = derive_tags(&self.contacts);
    }

    pub fn search_matches(&self, query: &str) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|contact| matches_search(contact, query))
            .cloned()
            .collect()
    }

    pub fn tag_matches(&self, tag: &str) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|contact| matches_tag(contact, tag))
            .cloned()
            .collect()
    }

    /// 沒有 id 時是新增表單；有 id 時帶入該聯絡人目前的資料
    pub fn form_context(&self, id: Option<ContactId>) -> Result<FormContext> {
        let known_tags = self.tags.clone();

        let Some(id) = id else {
            return Ok(FormContext {
                id: None,
                header: "Create Contact",
                full_name: String::new(),
                email: String::new(),
                phone_number: String::new(),
                known_tags,
                preselected_tags: Vec::new(),
            });
        };

        let contact = self.find(id).ok_or_else(|| ContactError::not_found(id))?;
        let preselected_tags = known_tags
            .iter()
            .filter(|tag| contact.tags.contains(tag))
            .cloned()
            .collect();

        Ok(FormContext {
            id: Some(id),
            header: "Edit Contact",
            full_name: contact.full_name.clone(),
            email: contact.email.clone(),
            phone_number: contact.phone_number.clone(),
            known_tags,
            preselected_tags,
        })
    }
}

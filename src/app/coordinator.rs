use crate::app::intent::Intent;
use crate::app::presenter::{FormOutcome, Presenter};
use crate::core::store::ContactStore;
use crate::domain::model::{ContactId, ContactInput};
use crate::domain::ports::{ContactApi, EventSource, RenderTarget};
use crate::utils::error::ContactError;

/// 串接 Presenter 與 Store：變更 Store → 重算 tags → 重畫列表。
/// 除了兩者之外不持有任何狀態。
pub struct Coordinator<A: ContactApi, T: RenderTarget, E: EventSource> {
    store: ContactStore<A>,
    presenter: Presenter<T, E>,
}

impl<A: ContactApi, T: RenderTarget, E: EventSource> Coordinator<A, T, E> {
    pub fn new(store: ContactStore<A>, presenter: Presenter<T, E>) -> Self {
        Self { store, presenter }
    }

    pub fn store(&self) -> &ContactStore<A> {
        &self.store
    }

    pub fn presenter(&self) -> &Presenter<T, E> {
        &self.presenter
    }

    pub async fn init(&mut self) {
        tracing::info!("Loading contacts");
        if let Err(e) = self.store.fetch_all().await {
            self.report("fetch contacts", &e);
        }
        self.refresh_view();
    }

    pub async fn run(&mut self) {
        self.init().await;

        loop {
            let intent = self.presenter.next_intent().await;
            tracing::debug!("Handling intent: {:?}", intent);

            if intent == Intent::Quit {
                break;
            }
            self.dispatch(intent).await;
        }

        tracing::info!("Session ended");
    }

    pub async fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::ShowAll => self.handle_form_cancel(),
            Intent::AddRequested => self.handle_form_request(None).await,
            Intent::EditRequested(id) => self.handle_form_request(Some(&id)).await,
            Intent::Delete(id) => self.handle_delete(&id).await,
            Intent::Search(query) => self.handle_search(&query),
            Intent::TagSelected(tag) => self.handle_tag_click(&tag),
            Intent::ClearTagFilter => self.handle_tag_filter_reset(),
            Intent::Refresh => self.handle_refresh().await,
            // Presenter 自行處理
            Intent::Help | Intent::Usage(_) | Intent::Quit => {}
        }
    }

    pub async fn handle_form_request(&mut self, raw_id: Option<&str>) {
        let operation = if raw_id.is_some() { "edit contact" } else { "add contact" };

        let context = match raw_id
            .map(ContactId::parse)
            .transpose()
            .and_then(|id| self.store.form_context(id))
        {
            Ok(context) => context,
            Err(e) => {
                self.report(operation, &e);
                return;
            }
        };

        match self.presenter.draw_contact_form(&context).await {
            FormOutcome::Submit(input) => match context.id {
                Some(id) => self.handle_edit(id, &input).await,
                None => self.handle_add(&input).await,
            },
            FormOutcome::Cancel => self.handle_form_cancel(),
        }
    }

    pub fn handle_form_cancel(&mut self) {
        self.presenter.draw_contacts(self.store.contacts());
    }

    pub async fn handle_add(&mut self, input: &ContactInput) {
        let result = self.store.add(input).await.map(|contact| contact.id);
        match result {
            Ok(id) => tracing::info!("Added contact {}", id),
            Err(e) => self.report("add contact", &e),
        }
        self.refresh_view();
    }

    pub async fn handle_edit(&mut self, id: ContactId, input: &ContactInput) {
        match self.store.edit(id, input).await {
            Ok(()) => tracing::info!("Edited contact {}", id),
            Err(e) => self.report("edit contact", &e),
        }
        self.refresh_view();
    }

    pub async fn handle_delete(&mut self, raw_id: &str) {
        let result = match ContactId::parse(raw_id) {
            Ok(id) => self.store.delete(id).await.map(|()| id),
            Err(e) => Err(e),
        };

        match result {
            Ok(id) => tracing::info!("Deleted contact {}", id),
            Err(e) => self.report("delete contact", &e),
        }
        self.refresh_view();
    }

    pub fn handle_search(&mut self, query: &str) {
        if query.is_empty() {
            self.presenter.draw_contacts(self.store.contacts());
            return;
        }

        let matches = self.store.search_matches(query);
        if matches.is_empty() {
            self.presenter.draw_no_contacts_found(query);
        } else {
            self.presenter.draw_contacts(&matches);
        }
    }

    pub fn handle_tag_click(&mut self, tag: &str) {
        let matches = self.store.tag_matches(tag);
        self.presenter.draw_tag_filtered_contacts(&matches, tag);
    }

    pub fn handle_tag_filter_reset(&mut self) {
        self.presenter.draw_contacts(self.store.contacts());
    }

    pub async fn handle_refresh(&mut self) {
        self.init().await;
    }

    fn refresh_view(&mut self) {
        self.store.recompute_tags();
        self.presenter.draw_contacts(self.store.contacts());
    }

    fn report(&self, operation: &str, error: &ContactError) {
        tracing::error!("❌ Failed to {}: {}", operation, error);
        self.presenter
            .alert(&format!("Failed to {}: {}", operation, error.user_friendly_message()));
    }
}

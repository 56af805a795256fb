use crate::app::intent::{parse_command, Intent, HELP_TEXT};
use crate::app::timer::DelayedAction;
use crate::domain::model::{Contact, ContactInput, FormContext};
use crate::domain::ports::{ConfigProvider, EventSource, RenderTarget};
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

const TITLE: &str = "Contact List";
const TAG_HINT: &str = "💡 Type `tag <name>` to filter by a tag";
const CANCEL_KEYWORD: &str = "cancel";

/// 同一時間只會顯示其中一種篩選狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIndicator {
    Search,
    TagFilter(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Submit(ContactInput),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintDelays {
    pub tag: Duration,
    pub field: Duration,
}

impl Default for HintDelays {
    fn default() -> Self {
        Self {
            tag: Duration::from_millis(1200),
            field: Duration::from_millis(3000),
        }
    }
}

impl HintDelays {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            tag: config.tag_hint_delay(),
            field: config.field_hint_delay(),
        }
    }
}

/// 負責把聯絡人畫到輸出目標，並把輸入事件翻譯成 Intent。
/// 不呼叫 Store，也不決定操作的業務意義。
pub struct Presenter<T: RenderTarget, E: EventSource> {
    target: Arc<T>,
    events: E,
    indicator: FilterIndicator,
    hint: DelayedAction,
    delays: HintDelays,
}

impl<T: RenderTarget, E: EventSource> Presenter<T, E> {
    pub fn new(target: Arc<T>, events: E, delays: HintDelays) -> Self {
        Self {
            target,
            events,
            indicator: FilterIndicator::Search,
            hint: DelayedAction::new(),
            delays,
        }
    }

    pub fn filter_indicator(&self) -> &FilterIndicator {
        &self.indicator
    }

    pub fn hint_pending(&self) -> bool {
        self.hint.is_pending()
    }

    pub fn alert(&self, message: &str) {
        self.target.alert(message);
    }

    pub fn draw_contacts(&mut self, contacts: &[Contact]) {
        self.hint.cancel();
        self.indicator = FilterIndicator::Search;

        let mut frame = self.header();
        frame.push_str(&render_contact_list(contacts));
        self.target.render(&frame);

        self.schedule_tag_hint(contacts);
    }

    pub fn draw_tag_filtered_contacts(&mut self, contacts: &[Contact], tag: &str) {
        self.hint.cancel();
        self.indicator = FilterIndicator::TagFilter(tag.to_string());

        let mut frame = self.header();
        frame.push_str(&render_contact_list(contacts));
        self.target.render(&frame);

        self.schedule_tag_hint(contacts);
    }

    pub fn draw_no_contacts_found(&mut self, query: &str) {
        self.hint.cancel();
        self.target
            .render(&format!("There are no contacts matching \"{}\".", query));
    }

    /// 逐欄詢問；編輯時空白輸入保留原值，任何欄位輸入 `cancel` 或輸入結束都會取消
    pub async fn draw_contact_form(&mut self, context: &FormContext) -> FormOutcome {
        self.hint.cancel();

        let mut frame = format!("== {} ==\n", context.header);
        frame.push_str("(type `cancel` at any prompt to go back)");
        self.target.render(&frame);

        let Some(full_name) = self
            .ask_field("Full name", &context.full_name, "Enter first and last name, e.g. Chase Philpot")
            .await
        else {
            return FormOutcome::Cancel;
        };
        let Some(email) = self
            .ask_field("Email", &context.email, "e.g. philpotc@yahoo.com")
            .await
        else {
            return FormOutcome::Cancel;
        };
        let Some(phone_number) = self
            .ask_field("Phone number", &context.phone_number, "Digits only, e.g. 1238675309")
            .await
        else {
            return FormOutcome::Cancel;
        };

        let selected_tags = if context.known_tags.is_empty() {
            Vec::new()
        } else {
            self.target
                .render(&format!("Existing tags: {}", context.known_tags.join(", ")));
            let current = context.preselected_tags.join(", ");
            let Some(answer) = self
                .ask_raw(
                    &format!("Tags [{}]", current),
                    "Comma-separated existing tags, `-` for none",
                )
                .await
            else {
                return FormOutcome::Cancel;
            };
            self.select_tags(&answer, context)
        };

        let Some(new_tag) = self
            .ask_raw("New tag", "Optional: one new tag to attach to this contact")
            .await
        else {
            return FormOutcome::Cancel;
        };

        FormOutcome::Submit(ContactInput {
            full_name,
            email,
            phone_number,
            selected_tags,
            new_tag: Some(new_tag).filter(|t| !t.is_empty()),
        })
    }

    /// 讀下一個事件並翻譯。輸入結束時回傳 Quit
    pub async fn next_intent(&mut self) -> Intent {
        loop {
            let line = self.events.next_line().await;
            // 任何輸入都會讓尚未出現的提示失效
            self.hint.cancel();

            let Some(line) = line else {
                return Intent::Quit;
            };
            let Some(intent) = parse_command(&line) else {
                continue;
            };

            match intent {
                Intent::Help => self.target.render(HELP_TEXT),
                Intent::Usage(usage) => self.target.alert(usage),
                Intent::Search(_) if matches!(self.indicator, FilterIndicator::TagFilter(_)) => {
                    self.target
                        .alert("Search is hidden while a tag filter is active; type `clear` first")
                }
                Intent::Delete(id) => {
                    if self
                        .confirm("Are you sure you want to delete this contact?")
                        .await
                    {
                        return Intent::Delete(id);
                    }
                }
                other => return other,
            }
        }
    }

    fn header(&self) -> String {
        let mut header = format!("{}\n", TITLE);
        match &self.indicator {
            FilterIndicator::Search => {
                header.push_str("[🔍 Search] type `search <text>` or just the text\n")
            }
            FilterIndicator::TagFilter(tag) => {
                let _ = writeln!(header, "[✖ Clear Tag Filter: {}] type `clear`", tag);
            }
        }
        header
    }

    fn schedule_tag_hint(&mut self, contacts: &[Contact]) {
        if contacts.iter().all(|contact| contact.tags.is_empty()) {
            return;
        }
        let target = Arc::clone(&self.target);
        self.hint
            .schedule(self.delays.tag, move || target.render(TAG_HINT));
    }

    fn schedule_field_hint(&mut self, help: &str) {
        let target = Arc::clone(&self.target);
        let text = format!("💡 {}", help);
        self.hint
            .schedule(self.delays.field, move || target.render(&text));
    }

    /// 回傳 None 代表取消
    async fn ask_raw(&mut self, label: &str, help: &str) -> Option<String> {
        self.schedule_field_hint(help);
        self.target.prompt(&format!("{}: ", label));

        let line = self.events.next_line().await;
        self.hint.cancel();

        let answer = line?.trim().to_string();
        if answer.eq_ignore_ascii_case(CANCEL_KEYWORD) {
            return None;
        }
        Some(answer)
    }

    async fn ask_field(&mut self, label: &str, current: &str, help: &str) -> Option<String> {
        let label = if current.is_empty() {
            label.to_string()
        } else {
            format!("{} [{}]", label, current)
        };

        let answer = self.ask_raw(&label, help).await?;
        if answer.is_empty() {
            Some(current.to_string())
        } else {
            Some(answer)
        }
    }

    fn select_tags(&self, answer: &str, context: &FormContext) -> Vec<String> {
        if answer.is_empty() {
            return context.preselected_tags.clone();
        }
        if answer == "-" {
            return Vec::new();
        }

        let mut selected: Vec<String> = Vec::new();
        for wanted in answer.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match context
                .known_tags
                .iter()
                .find(|known| known.eq_ignore_ascii_case(wanted))
            {
                Some(known) if !selected.contains(known) => selected.push(known.clone()),
                Some(_) => {}
                None => self.target.alert(&format!(
                    "Unknown tag ignored: {} (use the New tag prompt to add it)",
                    wanted
                )),
            }
        }
        selected
    }

    async fn confirm(&mut self, question: &str) -> bool {
        self.target.prompt(&format!("{} [y/N]: ", question));
        match self.events.next_line().await {
            Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}

pub fn render_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "There are no contacts.".to_string();
    }

    let mut out = String::new();
    for (i, contact) in contacts.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_contact_card(contact));
    }
    out
}

fn render_contact_card(contact: &Contact) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "#{:<4} {}", contact.id, contact.full_name);
    let _ = writeln!(card, "      Email: {}", contact.email);
    let _ = write!(card, "      Phone: {}", contact.phone_number);
    if !contact.tags.is_empty() {
        let _ = write!(card, "\n      Tags:  {}", contact.tags.join(" · "));
    }
    card
}

use chrono::{Days, Local, NaiveDate};
use serde::Serialize;

pub const BOOK_ANOTHER_ID: &str = "yes";
pub const DECLINE_ID: &str = "no";

/// A single choice offered to the user at some step of the conversation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectionOption {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SelectionOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Source of "today" for date generation.
pub trait Calendar {
    fn today(&self) -> NaiveDate;
}

/// The browser's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalendar;

impl Calendar for LocalCalendar {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always answers the same day.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedCalendar(pub NaiveDate);

#[cfg(test)]
impl Calendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn services() -> Vec<SelectionOption> {
    vec![
        SelectionOption::new("doctor", "Doctor Consultation").with_icon("🏥"),
        SelectionOption::new("salon", "Salon Appointment").with_icon("✂️"),
        SelectionOption::new("business", "Business Meeting").with_icon("💼"),
        SelectionOption::new("online", "Online Consultation").with_icon("💻"),
    ]
}

/// The seven days following `today`, labelled like `Mon, Jan 6`.
pub fn generate_dates(today: NaiveDate) -> Vec<SelectionOption> {
    (1..=7u64)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|day| {
            SelectionOption::new(
                day.format("%Y-%m-%d").to_string(),
                day.format("%a, %b %-d").to_string(),
            )
        })
        .collect()
}

pub fn generate_time_slots() -> Vec<SelectionOption> {
    [
        ("9am", "9:00 AM"),
        ("10am", "10:00 AM"),
        ("11am", "11:00 AM"),
        ("2pm", "2:00 PM"),
        ("3pm", "3:00 PM"),
        ("4pm", "4:00 PM"),
    ]
    .into_iter()
    .map(|(id, label)| SelectionOption::new(id, label))
    .collect()
}

pub fn confirm_choices() -> Vec<SelectionOption> {
    vec![
        SelectionOption::new(BOOK_ANOTHER_ID, "Book Another"),
        SelectionOption::new(DECLINE_ID, "No, Thanks"),
    ]
}

//! The booking assistant's conversation.
//!
//! [`BookingFlow`] is a plain state machine: every operation mutates the
//! conversation and may hand back a [`Scheduled`] follow-up. Whoever hosts the
//! flow waits `after_ms` and passes the follow-up to [`BookingFlow::resume`].
//! Nothing in here touches the DOM or a timer.

use std::collections::VecDeque;

use log::{debug, info};
use serde::Serialize;

use super::options::{
    confirm_choices, generate_dates, generate_time_slots, services, Calendar, LocalCalendar,
    SelectionOption, BOOK_ANOTHER_ID,
};
use crate::config;

const WELCOME: &str = "Hello! I'm your AI booking assistant. I can help you schedule appointments instantly. What type of appointment would you like to book?";
const TIME_PROMPT: &str = "Perfect! What time works best for you?";
const CONFIRMATION_FOLLOWUP: &str =
    "You will receive a confirmation email shortly. Would you like to book another appointment?";
const FAREWELL: &str = "Thank you! Have a great day! 👋";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Welcome,
    Date,
    Time,
    Confirm,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::Date => "date",
            Step::Time => "time",
            Step::Confirm => "confirm",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    pub step: Step,
    pub service: Option<SelectionOption>,
    pub date: Option<SelectionOption>,
    pub time: Option<SelectionOption>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self {
            step: Step::Welcome,
            service: None,
            date: None,
            time: None,
        }
    }
}

impl ConversationState {
    /// Selections are only ever filled in step order.
    pub fn is_ordered(&self) -> bool {
        (self.date.is_none() || self.service.is_some()) && (self.time.is_none() || self.date.is_some())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Ai,
    User,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::Ai => "ai",
            Sender::User => "user",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    fn ai(text: impl Into<String>) -> Self {
        Self { sender: Sender::Ai, text: text.into() }
    }

    fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Beat {
    Say(String),
    Present(Vec<SelectionOption>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// Play the next queued beat of the current step's script.
    Beat,
    /// Act on the option the user just picked.
    Advance,
    /// Start over after the farewell.
    Restart,
    /// Greet again after a reset.
    Welcome,
}

/// A continuation the host has to run after `after_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub after_ms: u32,
    pub wake: Wake,
    epoch: u64,
}

#[derive(Serialize)]
struct Booking<'a> {
    service: &'a str,
    date: &'a str,
    time: &'a str,
}

pub struct BookingFlow<C: Calendar = LocalCalendar> {
    calendar: C,
    state: ConversationState,
    log: Vec<Message>,
    options: Vec<SelectionOption>,
    accepting: bool,
    script: VecDeque<Beat>,
    choice: Option<SelectionOption>,
    epoch: u64,
}

impl Default for BookingFlow<LocalCalendar> {
    fn default() -> Self {
        Self::new(LocalCalendar)
    }
}

impl<C: Calendar> BookingFlow<C> {
    pub fn new(calendar: C) -> Self {
        Self {
            calendar,
            state: ConversationState::default(),
            log: Vec::new(),
            options: Vec::new(),
            accepting: false,
            script: VecDeque::new(),
            choice: None,
            epoch: 0,
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.log
    }

    pub fn options(&self) -> &[SelectionOption] {
        &self.options
    }

    /// Whether the displayed options still take a click.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Begins a fresh conversation and greets right away.
    pub fn start(&mut self) -> Option<Scheduled> {
        self.clear();
        info!("Starting booking conversation");
        self.enter_welcome()
    }

    /// Records the user's pick of the option with `id`.
    ///
    /// Ignored unless that option is on screen and still enabled. The pick
    /// disables the whole set, so a second click on anything is dropped.
    pub fn select_option(&mut self, id: &str) -> Option<Scheduled> {
        if !self.accepting {
            debug!("Ignoring selection {} while options are disabled", id);
            return None;
        }
        let Some(option) = self.options.iter().find(|o| o.id == id).cloned() else {
            debug!("Ignoring selection of unknown option {}", id);
            return None;
        };

        self.accepting = false;
        self.log.push(Message::user(option.label.clone()));
        debug!("Selected {} at {:?}", option.id, self.state.step);
        self.choice = Some(option);
        Some(self.schedule(config::SELECTION_DELAY_MS, Wake::Advance))
    }

    /// Clears the conversation and schedules a new greeting.
    pub fn reset(&mut self) -> Option<Scheduled> {
        self.clear();
        info!("Booking conversation reset");
        Some(self.schedule(config::RESET_DELAY_MS, Wake::Welcome))
    }

    /// Runs a follow-up handed out earlier. Follow-ups from before the last
    /// reset are dropped.
    pub fn resume(&mut self, scheduled: Scheduled) -> Option<Scheduled> {
        if scheduled.epoch != self.epoch {
            debug!("Dropping stale {:?}", scheduled.wake);
            return None;
        }
        match scheduled.wake {
            Wake::Beat => self.play(),
            Wake::Advance => self.advance(),
            Wake::Restart => self.reset(),
            Wake::Welcome => self.enter_welcome(),
        }
    }

    fn clear(&mut self) {
        self.state = ConversationState::default();
        self.log.clear();
        self.options.clear();
        self.accepting = false;
        self.script.clear();
        self.choice = None;
        self.epoch += 1;
    }

    fn schedule(&self, after_ms: u32, wake: Wake) -> Scheduled {
        Scheduled { after_ms, wake, epoch: self.epoch }
    }

    fn enter_welcome(&mut self) -> Option<Scheduled> {
        self.state.step = Step::Welcome;
        self.perform([Beat::Say(WELCOME.to_string()), Beat::Present(services())])
    }

    fn advance(&mut self) -> Option<Scheduled> {
        let choice = self.choice.take()?;
        debug_assert!(self.state.is_ordered());
        match self.state.step {
            Step::Welcome => {
                let prompt = format!(
                    "Great choice! When would you like to schedule your {}?",
                    choice.label
                );
                self.state.service = Some(choice);
                self.state.step = Step::Date;
                let dates = generate_dates(self.calendar.today());
                self.perform([Beat::Say(prompt), Beat::Present(dates)])
            }
            Step::Date => {
                self.state.date = Some(choice);
                self.state.step = Step::Time;
                self.perform([Beat::Say(TIME_PROMPT.to_string()), Beat::Present(generate_time_slots())])
            }
            Step::Time => {
                self.state.time = Some(choice);
                self.state.step = Step::Confirm;
                let summary = self.summary()?;
                self.perform([
                    Beat::Say(summary),
                    Beat::Say(CONFIRMATION_FOLLOWUP.to_string()),
                    Beat::Present(confirm_choices()),
                ])
            }
            Step::Confirm if choice.id == BOOK_ANOTHER_ID => self.reset(),
            Step::Confirm => {
                self.log.push(Message::ai(FAREWELL));
                self.options.clear();
                Some(self.schedule(config::FAREWELL_RESTART_MS, Wake::Restart))
            }
        }
    }

    fn summary(&self) -> Option<String> {
        let (service, date, time) = (
            self.state.service.as_ref()?,
            self.state.date.as_ref()?,
            self.state.time.as_ref()?,
        );
        let booking = Booking {
            service: &service.label,
            date: &date.label,
            time: &time.label,
        };
        match serde_json::to_string(&booking) {
            Ok(json) => info!("Booking confirmed: {}", json),
            Err(e) => debug!("Could not encode booking: {}", e),
        }
        Some(format!(
            "Excellent! I've booked your {} for {} at {}.",
            service.label, date.label, time.label
        ))
    }

    fn perform(&mut self, beats: impl IntoIterator<Item = Beat>) -> Option<Scheduled> {
        self.script = beats.into_iter().collect();
        self.play()
    }

    /// Plays one beat and asks to be woken for the next.
    fn play(&mut self) -> Option<Scheduled> {
        match self.script.pop_front()? {
            Beat::Say(text) => self.log.push(Message::ai(text)),
            Beat::Present(options) => {
                self.options = options;
                self.accepting = true;
            }
        }
        if self.script.is_empty() {
            None
        } else {
            Some(self.schedule(config::MESSAGE_PAUSE_MS, Wake::Beat))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::options::FixedCalendar;
    use chrono::NaiveDate;

    fn flow() -> BookingFlow<FixedCalendar> {
        BookingFlow::new(FixedCalendar(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()))
    }

    /// Runs follow-ups until the flow goes quiet, like a host whose timers all fire.
    fn settle(flow: &mut BookingFlow<FixedCalendar>, mut next: Option<Scheduled>) {
        while let Some(scheduled) = next {
            next = flow.resume(scheduled);
        }
    }

    fn pick(flow: &mut BookingFlow<FixedCalendar>, id: &str) {
        let next = flow.select_option(id);
        assert!(next.is_some(), "option {} was not selectable", id);
        settle(flow, next);
    }

    fn last_ai(flow: &BookingFlow<FixedCalendar>) -> &str {
        flow.messages()
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Ai)
            .map(|m| m.text.as_str())
            .unwrap()
    }

    #[test]
    fn start_greets_then_offers_services() {
        let mut flow = flow();
        let next = flow.start();

        assert_eq!(flow.messages(), &[Message::ai(WELCOME)]);
        assert!(flow.options().is_empty());
        assert_eq!(next.map(|s| (s.after_ms, s.wake)), Some((config::MESSAGE_PAUSE_MS, Wake::Beat)));

        settle(&mut flow, next);
        let ids: Vec<_> = flow.options().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["doctor", "salon", "business", "online"]);
        assert!(flow.is_accepting());
        assert_eq!(flow.state(), &ConversationState::default());
    }

    #[test]
    fn steps_are_visited_in_order() {
        let mut flow = flow();
        let start = flow.start();
        settle(&mut flow, start);

        let mut visited = vec![flow.state().step];
        for id in ["salon", "2025-01-08", "3pm"] {
            pick(&mut flow, id);
            visited.push(flow.state().step);
            assert!(flow.state().is_ordered());
        }
        assert_eq!(visited, vec![Step::Welcome, Step::Date, Step::Time, Step::Confirm]);
    }

    #[test]
    fn confirmation_names_all_three_choices() {
        let mut flow = flow();
        let start = flow.start();
        settle(&mut flow, start);

        pick(&mut flow, "doctor");
        assert_eq!(
            last_ai(&flow),
            "Great choice! When would you like to schedule your Doctor Consultation?"
        );
        assert_eq!(flow.options()[0].label, "Mon, Jan 6");

        pick(&mut flow, "2025-01-06");
        assert_eq!(last_ai(&flow), TIME_PROMPT);

        pick(&mut flow, "9am");
        let summary = &flow.messages()[flow.messages().len() - 2];
        assert_eq!(summary.sender, Sender::Ai);
        assert_eq!(
            summary.text,
            "Excellent! I've booked your Doctor Consultation for Mon, Jan 6 at 9:00 AM."
        );
        assert_eq!(last_ai(&flow), CONFIRMATION_FOLLOWUP);

        let state = flow.state();
        assert_eq!(state.service.as_ref().map(|s| s.label.as_str()), Some("Doctor Consultation"));
        assert_eq!(state.date.as_ref().map(|d| d.label.as_str()), Some("Mon, Jan 6"));
        assert_eq!(state.time.as_ref().map(|t| t.label.as_str()), Some("9:00 AM"));
        assert_eq!(flow.options(), confirm_choices().as_slice());
    }

    #[test]
    fn picks_are_echoed_as_user_messages() {
        let mut flow = flow();
        let start = flow.start();
        settle(&mut flow, start);
        pick(&mut flow, "online");

        let users: Vec<_> = flow
            .messages()
            .iter()
            .filter(|m| m.sender == Sender::User)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(users, vec!["Online Consultation"]);
    }

    #[test]
    fn double_click_is_dropped() {
        let mut flow = flow();
        let start = flow.start();
        settle(&mut flow, start);

        let first = flow.select_option("doctor");
        assert!(first.is_some());
        assert!(!flow.is_accepting());
        assert_eq!(flow.select_option("doctor"), None);
        assert_eq!(flow.select_option("salon"), None);
        assert_eq!(flow.messages().len(), 2);

        settle(&mut flow, first);
        assert_eq!(flow.state().service.as_ref().map(|s| s.id.as_str()), Some("doctor"));
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut flow = flow();
        let start = flow.start();
        settle(&mut flow, start);

        assert_eq!(flow.select_option("9am"), None);
        assert!(flow.is_accepting());
        assert_eq!(flow.messages().len(), 1);
    }

    #[test]
    fn selecting_before_options_arrive_is_ignored() {
        let mut flow = flow();
        flow.start();
        assert_eq!(flow.select_option("doctor"), None);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut flow = flow();
        let start = flow.start();
        settle(&mut flow, start);
        pick(&mut flow, "business");

        let next = flow.reset();
        assert_eq!(flow.state(), &ConversationState::default());
        assert!(flow.messages().is_empty());
        assert!(flow.options().is_empty());
        assert_eq!(flow.select_option("business"), None);

        let next = next.unwrap();
        assert_eq!((next.after_ms, next.wake), (config::RESET_DELAY_MS, Wake::Welcome));
        settle(&mut flow, Some(next));
        assert_eq!(flow.messages(), &[Message::ai(WELCOME)]);
        assert_eq!(flow.options().len(), 4);
    }

    #[test]
    fn stale_followups_are_dropped_after_reset() {
        let mut flow = flow();
        let start = flow.start();
        settle(&mut flow, start);

        let pending = flow.select_option("doctor").unwrap();
        flow.reset();
        assert_eq!(flow.resume(pending), None);
        assert_eq!(flow.state(), &ConversationState::default());
        assert!(flow.messages().is_empty());
    }

    fn reach_confirm(flow: &mut BookingFlow<FixedCalendar>) {
        let start = flow.start();
        settle(flow, start);
        pick(flow, "doctor");
        pick(flow, "2025-01-06");
        pick(flow, "9am");
    }

    #[test]
    fn book_another_starts_over() {
        let mut flow = flow();
        reach_confirm(&mut flow);

        let next = flow.select_option(BOOK_ANOTHER_ID).unwrap();
        let after_reset = flow.resume(next).unwrap();
        assert_eq!(flow.state(), &ConversationState::default());
        assert!(flow.messages().is_empty());
        assert_eq!(after_reset.wake, Wake::Welcome);

        settle(&mut flow, Some(after_reset));
        assert_eq!(flow.messages(), &[Message::ai(WELCOME)]);
    }

    #[test]
    fn declining_says_goodbye_then_restarts() {
        let mut flow = flow();
        reach_confirm(&mut flow);

        let next = flow.select_option("no").unwrap();
        let restart = flow.resume(next).unwrap();
        assert_eq!(last_ai(&flow), FAREWELL);
        assert!(flow.options().is_empty());
        assert_eq!((restart.after_ms, restart.wake), (config::FAREWELL_RESTART_MS, Wake::Restart));

        let welcome = flow.resume(restart).unwrap();
        assert_eq!(flow.state(), &ConversationState::default());
        assert!(flow.messages().is_empty());

        settle(&mut flow, Some(welcome));
        assert_eq!(flow.state().step, Step::Welcome);
        assert_eq!(flow.messages(), &[Message::ai(WELCOME)]);
    }

    #[test]
    fn start_is_idempotent() {
        let mut a = flow();
        let mut b = flow();
        let first = a.start();
        settle(&mut a, first);
        let again = a.start();
        settle(&mut a, again);
        let only = b.start();
        settle(&mut b, only);

        assert_eq!(a.state(), b.state());
        assert_eq!(a.messages(), b.messages());
        assert_eq!(a.options(), b.options());
    }

    #[test]
    fn state_serializes_with_lowercase_step() {
        let json = serde_json::to_value(ConversationState::default()).unwrap();
        assert_eq!(json["step"], "welcome");
        assert!(json["service"].is_null());
    }
}

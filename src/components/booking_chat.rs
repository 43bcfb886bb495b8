use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::chatbot::flow::{BookingFlow, Scheduled};
use crate::chatbot::options::SelectionOption;

pub enum BookingChatMsg {
    Select(String),
    Wake(Scheduled),
}

/// The booking assistant demo: a message log above a row of option buttons.
pub struct BookingChat {
    flow: BookingFlow,
    pending: Option<Timeout>,
    messages_ref: NodeRef,
}

impl BookingChat {
    /// Arms a timer for the flow's follow-up. Replacing the handle cancels
    /// whatever was armed before.
    fn schedule(&mut self, ctx: &Context<Self>, next: Option<Scheduled>) {
        self.pending = next.map(|scheduled| {
            let link = ctx.link().clone();
            Timeout::new(scheduled.after_ms, move || {
                link.send_message(BookingChatMsg::Wake(scheduled));
            })
        });
    }

    fn render_option(&self, ctx: &Context<Self>, option: &SelectionOption) -> Html {
        let id = option.id.clone();
        let disabled = !self.flow.is_accepting();
        html! {
            <button
                class={classes!("option-btn", disabled.then_some("disabled"))}
                disabled={disabled}
                onclick={ctx.link().callback(move |_| BookingChatMsg::Select(id.clone()))}
            >
                if let Some(icon) = &option.icon {
                    <span class="option-icon">{ icon }</span>
                }
                { &option.label }
            </button>
        }
    }
}

impl Component for BookingChat {
    type Message = BookingChatMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut chat = Self {
            flow: BookingFlow::default(),
            pending: None,
            messages_ref: NodeRef::default(),
        };
        let next = chat.flow.start();
        chat.schedule(ctx, next);
        chat
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let next = match msg {
            BookingChatMsg::Select(id) => {
                if !self.flow.is_accepting() {
                    debug!("Option {} clicked while disabled", id);
                    return false;
                }
                self.flow.select_option(&id)
            }
            BookingChatMsg::Wake(scheduled) => self.flow.resume(scheduled),
        };
        self.schedule(ctx, next);
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(log) = self.messages_ref.cast::<Element>() {
            log.set_scroll_top(log.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chat-widget" data-step={self.flow.state().step.as_str()}>
                <div class="chat-header">
                    <span class="chat-status"></span>
                    <h3>{ "AI Booking Assistant" }</h3>
                </div>
                <div class="chat-messages" ref={self.messages_ref.clone()}>
                    { for self.flow.messages().iter().map(|message| html! {
                        <div class={classes!("message", message.sender.css_class())}>
                            { &message.text }
                        </div>
                    }) }
                </div>
                <div class="chat-options">
                    { for self.flow.options().iter().map(|option| self.render_option(ctx, option)) }
                </div>
            </div>
        }
    }
}

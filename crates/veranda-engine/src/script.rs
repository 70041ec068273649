// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversation script as data.
//!
//! The step controller decides *when* a line is spoken; the script decides
//! *what* is said and how long the concierge pretends to type first. Keeping
//! the copy here (and overridable) keeps the FSM free of wording concerns.

use std::time::Duration;

/// One scripted bot utterance with its typing delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotLine {
    pub text: String,
    pub delay: Duration,
}

impl BotLine {
    /// A line delivered after a simulated typing delay.
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
        }
    }

    /// A line delivered immediately, with no typing indicator.
    pub fn immediate(text: impl Into<String>) -> Self {
        Self::new(text, Duration::ZERO)
    }
}

/// All scripted copy and pacing for one conversation flavor.
///
/// Templates use `{name}` and `{link}` placeholders. Delays follow the
/// cadence of a human agent: short acknowledgements, longer prompts.
#[derive(Debug, Clone)]
pub struct Script {
    pub greeting_intro: String,
    pub greeting_name_prompt: String,
    pub name_ack: String,
    pub email_prompt: String,
    pub email_invalid: String,
    pub email_ack: String,
    pub phone_prompt: String,
    pub phone_ack: String,
    pub completion_thanks: String,
    pub completion_connecting: String,
    pub fallthrough: String,
    pub success_confirmation: String,
    pub success_followup: String,
    pub failure_notice: String,
    pub failure_fallback: String,
    /// Delay between the success follow-up and the minimize signal.
    pub minimize_delay: Duration,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            greeting_intro: "Hi! Welcome to Veranda. I'm your personal concierge and I can \
                             walk you through every detail of the development."
                .into(),
            greeting_name_prompt: "May I start with your name? It helps me keep things personal."
                .into(),
            name_ack: "Nice to meet you, {name}!".into(),
            email_prompt: "So I can send you the full brochure, what is your best email address?"
                .into(),
            email_invalid: "Please enter a valid email address (for example: joao@email.com)"
                .into(),
            email_ack: "Perfect!".into(),
            phone_prompt: "And your WhatsApp number with area code? (e.g. 11 99999-9999)".into(),
            phone_ack: "Great!".into(),
            completion_thanks: "Excellent! Thank you for the details.".into(),
            completion_connecting: "I'm connecting you with one of our specialists on WhatsApp. \
                                    You'll hear from us shortly!"
                .into(),
            fallthrough: "Sorry, I didn't catch that. Could you rephrase?".into(),
            success_confirmation: "{name}, your information was sent successfully!".into(),
            success_followup: "Our specialist will reach out on WhatsApp in a few minutes. \
                               Meanwhile, feel free to keep exploring."
                .into(),
            failure_notice: "Something went wrong while sending your information.".into(),
            failure_fallback: "You can reach our team directly on WhatsApp: {link}".into(),
            minimize_delay: Duration::from_millis(8000),
        }
    }
}

impl Script {
    /// Opening lines spoken before any visitor input.
    pub fn greeting(&self) -> Vec<BotLine> {
        vec![
            BotLine::new(&self.greeting_intro, Duration::from_millis(1000)),
            BotLine::new(&self.greeting_name_prompt, Duration::from_millis(2000)),
        ]
    }

    /// Acknowledgement after the name step, followed by the email prompt.
    pub fn name_accepted(&self, name: &str) -> Vec<BotLine> {
        vec![
            BotLine::new(
                self.name_ack.replace("{name}", name),
                Duration::from_millis(1000),
            ),
            BotLine::new(&self.email_prompt, Duration::from_millis(2500)),
        ]
    }

    /// Re-prompt after an email that fails the shape check.
    pub fn email_rejected(&self) -> Vec<BotLine> {
        vec![BotLine::new(&self.email_invalid, Duration::from_millis(1000))]
    }

    /// Acknowledgement after the email step, followed by the phone prompt.
    pub fn email_accepted(&self) -> Vec<BotLine> {
        vec![
            BotLine::new(&self.email_ack, Duration::from_millis(1000)),
            BotLine::new(&self.phone_prompt, Duration::from_millis(2000)),
        ]
    }

    /// Closing lines after the phone step completes the conversation.
    pub fn phone_accepted(&self) -> Vec<BotLine> {
        vec![
            BotLine::new(&self.phone_ack, Duration::from_millis(1000)),
            BotLine::new(&self.completion_thanks, Duration::from_millis(1000)),
            BotLine::new(&self.completion_connecting, Duration::from_millis(3000)),
        ]
    }

    /// Generic reply for input arriving outside a collecting step.
    pub fn fallthrough_reply(&self) -> Vec<BotLine> {
        vec![BotLine::new(&self.fallthrough, Duration::from_millis(1000))]
    }

    /// Confirmation pair spoken after both collaborators accepted the lead.
    pub fn submission_succeeded(&self, name: &str) -> Vec<BotLine> {
        vec![
            BotLine::new(
                self.success_confirmation.replace("{name}", name),
                Duration::from_millis(2000),
            ),
            BotLine::new(&self.success_followup, Duration::from_millis(4000)),
        ]
    }

    /// Failure notice, plus a direct contact link when one is configured.
    pub fn submission_failed(&self, fallback_whatsapp: Option<&str>) -> Vec<BotLine> {
        let mut lines = vec![BotLine::new(&self.failure_notice, Duration::from_millis(1000))];
        if let Some(number) = fallback_whatsapp {
            let link = format!("https://wa.me/{number}");
            lines.push(BotLine::new(
                self.failure_fallback.replace("{link}", &link),
                Duration::from_millis(2000),
            ));
        }
        lines
    }
}

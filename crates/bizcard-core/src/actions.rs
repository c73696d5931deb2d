//! Contact actions resolved against the card's contact config.
//!
//! A [`BoundAction`] is plain data: the URL to open and the message to show.
//! The UI builds them once per render and fires them without extra state.

use std::io;

use crate::config::{ContactAction, ContactActionKey, ContactConfig, ContactIcon};
use crate::feedback::FeedbackChannel;
use crate::links::{gmail_compose_url, whatsapp_url};

/// Opens outbound links outside the card, in a fresh browser context.
///
/// Implementations may block; call them off the UI thread.
pub trait LinkOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundAction {
    pub key: ContactActionKey,
    pub label: String,
    pub detail: String,
    pub icon: ContactIcon,
    /// Opened externally when the action fires
    pub url: String,
    pub feedback: String,
}

impl BoundAction {
    /// Open the action's URL and, once it has opened, show its feedback.
    ///
    /// A failed open shows nothing and returns the error.
    pub fn follow(&self, opener: &impl LinkOpener, feedback: &FeedbackChannel) -> io::Result<()> {
        opener.open(&self.url)?;
        feedback.show(self.feedback.as_str());
        Ok(())
    }
}

/// Outbound URL for a contact channel.
pub fn target_url(key: ContactActionKey, contact: &ContactConfig) -> String {
    match key {
        ContactActionKey::Phone => {
            whatsapp_url(&contact.whatsapp_number, &contact.whatsapp_message)
        }
        ContactActionKey::Email => gmail_compose_url(
            &contact.email.address,
            &contact.email.subject,
            &contact.email.body,
        ),
        ContactActionKey::Website => contact.website_url.clone(),
    }
}

fn bind(action: &ContactAction, contact: &ContactConfig) -> BoundAction {
    BoundAction {
        key: action.key,
        label: action.label.clone(),
        detail: action.detail.clone(),
        icon: action.icon,
        url: target_url(action.key, contact),
        feedback: action.feedback.clone(),
    }
}

/// Every configured action, in config order.
pub fn bind_actions(contact: &ContactConfig) -> Vec<BoundAction> {
    contact.actions.iter().map(|a| bind(a, contact)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CardConfig;
    use std::cell::RefCell;

    /// Records every URL; fails when `fail` is set.
    #[derive(Default)]
    struct RecordingOpener {
        fail: bool,
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn follow_opens_url_then_shows_feedback() {
        let card = CardConfig::builtin().unwrap();
        let action = bind_actions(&card.contact).remove(0);
        let opener = RecordingOpener::default();
        let feedback = FeedbackChannel::default();

        action.follow(&opener, &feedback).unwrap();

        assert_eq!(*opener.opened.borrow(), [action.url.clone()]);
        assert_eq!(feedback.current().as_deref(), Some("Abriendo WhatsApp"));
    }

    #[tokio::test]
    async fn failed_open_shows_no_feedback() {
        let card = CardConfig::builtin().unwrap();
        let action = bind_actions(&card.contact).remove(2);
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };
        let feedback = FeedbackChannel::default();

        let err = action.follow(&opener, &feedback).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(opener.opened.borrow().len(), 1);
        assert_eq!(feedback.current(), None);
    }

    #[test]
    fn binds_each_channel_to_its_url() {
        let card = CardConfig::builtin().unwrap();
        let actions = bind_actions(&card.contact);

        assert_eq!(actions.len(), 3);
        assert!(actions[0].url.starts_with("https://wa.me/51937375605?text="));
        assert!(actions[1]
            .url
            .starts_with("https://mail.google.com/mail/?view=cm&fs=1&to="));
        assert_eq!(actions[2].url, "https://www.fotonmotor.com");
        assert_eq!(actions[0].feedback, "Abriendo WhatsApp");
    }

    #[test]
    fn no_actions_configured() {
        let mut card = CardConfig::builtin().unwrap();
        card.contact.actions.clear();
        assert!(bind_actions(&card.contact).is_empty());
    }

    #[test]
    fn repeated_keys_are_kept() {
        let mut card = CardConfig::builtin().unwrap();
        let website = card.contact.actions[2].clone();
        card.contact.actions.push(website);
        let actions = bind_actions(&card.contact);
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[3].key, ContactActionKey::Website);
    }
}

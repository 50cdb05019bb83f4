use crate::domain::model::Participant;
use crate::domain::ports::Notifier;
use crate::utils::error::{Result, SantaError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Posts one `{to, subject, body}` message per participant to a delivery
/// endpoint (mail relay, chat bridge, whatever answers HTTP). The message
/// goes to the gifter and names their receiver; the receiver's preference
/// hint is included when present.
pub struct WebhookNotifier {
    endpoint: String,
    event_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    to: &'a str,
    subject: &'a str,
    body: String,
}

impl WebhookNotifier {
    pub fn new(endpoint: impl Into<String>, event_name: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            event_name: event_name.into(),
            client: Client::new(),
        }
    }

    fn compose_body(&self, gifter: &Participant, receiver: &Participant) -> String {
        let mut body = format!(
            "Happy holidays, {}! You have a secret mission: find {} a gift for {}.",
            gifter.name, receiver.name, self.event_name
        );
        if let Some(hint) = &receiver.preference_hint {
            body.push_str(&format!(" Some clues to help you along: {}.", hint));
        }
        body.push_str(" Keep it secret!");
        body
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, gifter: &Participant, receiver: &Participant) -> Result<()> {
        let Some(address) = gifter.contact_address.as_deref() else {
            return Err(SantaError::Notification {
                participant: gifter.name.clone(),
                reason: "no contact address on roster".to_string(),
            });
        };

        let message = Message {
            to: address,
            subject: &self.event_name,
            body: self.compose_body(gifter, receiver),
        };

        tracing::debug!("Posting notification for {}", gifter.name);
        self.client
            .post(&self.endpoint)
            .json(&message)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SantaError::Notification {
                participant: gifter.name.clone(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn alice() -> Participant {
        Participant::new("Alice", "Bob").with_contact("alice@example.com")
    }

    fn carol() -> Participant {
        Participant::new("Carol", "").with_hint("wool socks")
    }

    #[tokio::test]
    async fn test_posts_message_to_gifter_address() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/send")
                .json_body_partial(r#"{"to": "alice@example.com", "subject": "Secret Santa 2026"}"#);
            then.status(200);
        });

        let notifier = WebhookNotifier::new(server.url("/send"), "Secret Santa 2026");
        notifier.notify(&alice(), &carol()).await.unwrap();
        mock.assert();
    }

    #[test]
    fn test_body_names_receiver_and_hint() {
        let notifier = WebhookNotifier::new("http://localhost/send", "Secret Santa 2026");
        let body = notifier.compose_body(&alice(), &carol());
        assert!(body.contains("Alice"));
        assert!(body.contains("find Carol a gift"));
        assert!(body.contains("wool socks"));

        let hintless = Participant::new("Erin", "");
        let body = notifier.compose_body(&alice(), &hintless);
        assert!(!body.contains("clues"));
    }

    #[tokio::test]
    async fn test_missing_contact_address_fails_that_participant() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/send");
            then.status(200);
        });

        let notifier = WebhookNotifier::new(server.url("/send"), "Secret Santa 2026");
        let no_address = Participant::new("Dave", "");
        let err = notifier.notify(&no_address, &carol()).await.unwrap_err();

        assert!(matches!(err, SantaError::Notification { .. }));
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn test_delivery_rejection_is_a_notification_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/send");
            then.status(502);
        });

        let notifier = WebhookNotifier::new(server.url("/send"), "Secret Santa 2026");
        let err = notifier.notify(&alice(), &carol()).await.unwrap_err();
        assert!(matches!(err, SantaError::Notification { .. }));
    }
}

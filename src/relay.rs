//! Outbound email through the EmailJS relay: one notification to the site
//! owner and one auto-reply to the sender, per contact submission.

use futures::future::{self, FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::Serialize;

use crate::config::RelayConfig;
use crate::error::{ConfigError, RelayError};
use crate::state::contact::ContactForm;

pub trait EmailRelay {
    fn send<'a>(
        &'a self,
        template_id: &'a str,
        params: &'a ContactForm,
    ) -> LocalBoxFuture<'a, Result<(), RelayError>>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactForm,
}

pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

impl EmailRelay for EmailJsRelay {
    fn send<'a>(
        &'a self,
        template_id: &'a str,
        params: &'a ContactForm,
    ) -> LocalBoxFuture<'a, Result<(), RelayError>> {
        async move {
            let body = SendRequest {
                service_id: &self.config.service_id,
                template_id,
                user_id: &self.config.public_key,
                template_params: params,
            };
            let request = Request::post(&self.config.api_url)
                .json(&body)
                .map_err(|e| RelayError::Encode(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| RelayError::Network(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(RelayError::Rejected {
                    template: template_id.to_string(),
                    status,
                    body,
                })
            }
        }
        .boxed_local()
    }
}

/// Sends the owner notification and the auto-reply concurrently and waits
/// for both. Any single failure fails the whole attempt.
pub async fn dispatch_contact<R: EmailRelay>(
    relay: &R,
    owner_template: &str,
    autoreply_template: &str,
    params: &ContactForm,
) -> Result<(), RelayError> {
    let (owner, autoreply) = future::join(
        relay.send(owner_template, params),
        relay.send(autoreply_template, params),
    )
    .await;

    if let Err(e) = &owner {
        log::error!("owner notification failed: {}", e);
    }
    if let Err(e) = &autoreply {
        log::error!("auto-reply failed: {}", e);
    }
    owner.and(autoreply)
}

/// Builds the relay from build-time configuration and runs one submission.
pub async fn submit_contact(params: ContactForm) -> Result<(), RelayError> {
    submit_with_config(RelayConfig::from_build_env(), params).await
}

/// Missing configuration fails the attempt like any other relay error.
pub async fn submit_with_config(
    config: Result<RelayConfig, ConfigError>,
    params: ContactForm,
) -> Result<(), RelayError> {
    let relay = EmailJsRelay::new(config?);
    let config = relay.config();
    dispatch_contact(
        &relay,
        &config.template_id,
        &config.autoreply_template_id,
        &params,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::contact::{ContactController, Field, SubmissionStatus};
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeRelay {
        failing: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl EmailRelay for FakeRelay {
        fn send<'a>(
            &'a self,
            template_id: &'a str,
            _params: &'a ContactForm,
        ) -> LocalBoxFuture<'a, Result<(), RelayError>> {
            self.calls.borrow_mut().push(template_id.to_string());
            let fail = self.failing.iter().any(|t| *t == template_id);
            async move {
                if fail {
                    Err(RelayError::Rejected {
                        template: template_id.to_string(),
                        status: 400,
                        body: "bad template".to_string(),
                    })
                } else {
                    Ok(())
                }
            }
            .boxed_local()
        }
    }

    fn filled() -> ContactController {
        let mut c = ContactController::default();
        c.update(Field::Name, "Ada".to_string());
        c.update(Field::Email, "ada@example.com".to_string());
        c.update(Field::Subject, "Hello".to_string());
        c.update(Field::Message, "Hi there".to_string());
        c
    }

    fn run(controller: &mut ContactController, relay: &FakeRelay) {
        if let Some(params) = controller.begin_submit() {
            let result = block_on(dispatch_contact(relay, "owner", "reply", &params));
            controller.finish(&result);
        }
    }

    #[test]
    fn test_both_sent_success_resets_form() {
        let relay = FakeRelay::default();
        let mut c = filled();
        run(&mut c, &relay);
        assert_eq!(c.status(), SubmissionStatus::Success);
        assert!(c.form().is_empty());
        assert_eq!(*relay.calls.borrow(), vec!["owner", "reply"]);
    }

    #[test]
    fn test_autoreply_failure_marks_attempt_failed() {
        let relay = FakeRelay {
            failing: vec!["reply"],
            ..Default::default()
        };
        let mut c = filled();
        let before = c.form().clone();
        run(&mut c, &relay);
        assert_eq!(c.status(), SubmissionStatus::Error);
        assert_eq!(c.form(), &before);
        // Both legs still ran to completion.
        assert_eq!(relay.calls.borrow().len(), 2);
    }

    #[test]
    fn test_owner_failure_reports_owner_error() {
        let relay = FakeRelay {
            failing: vec!["owner"],
            ..Default::default()
        };
        let params = filled().form().clone();
        let err = block_on(dispatch_contact(&relay, "owner", "reply", &params)).unwrap_err();
        assert!(matches!(err, RelayError::Rejected { ref template, .. } if template == "owner"));
    }

    #[test]
    fn test_pending_submission_does_not_dispatch_again() {
        let relay = FakeRelay::default();
        let mut c = filled();
        let params = c.begin_submit().unwrap();
        // Second submit while the first is still in flight.
        run(&mut c, &relay);
        assert!(relay.calls.borrow().is_empty());

        let result = block_on(dispatch_contact(&relay, "owner", "reply", &params));
        c.finish(&result);
        assert_eq!(relay.calls.borrow().len(), 2);
        assert_eq!(c.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_missing_config_fails_attempt_and_keeps_fields() {
        let mut c = filled();
        let before = c.form().clone();
        let params = c.begin_submit().unwrap();

        let config = RelayConfig::from_lookup(|key| match key {
            "EMAILJS_SERVICE_ID" => Some("service_x".to_string()),
            "EMAILJS_TEMPLATE_ID" => Some("template_owner".to_string()),
            "EMAILJS_AUTOREPLY_TEMPLATE_ID" => Some("template_reply".to_string()),
            _ => None,
        });
        let result = block_on(submit_with_config(config, params));
        assert_eq!(
            result,
            Err(RelayError::Config(ConfigError::Missing("EMAILJS_PUBLIC_KEY")))
        );

        c.finish(&result);
        assert_eq!(c.status(), SubmissionStatus::Error);
        assert_eq!(c.form(), &before);
    }

    #[test]
    fn test_send_request_wire_shape() {
        let params = filled().form().clone();
        let body = SendRequest {
            service_id: "service_x",
            template_id: "template_owner",
            user_id: "pk_123",
            template_params: &params,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["user_id"], "pk_123");
        assert_eq!(json["template_params"]["email"], "ada@example.com");
    }
}

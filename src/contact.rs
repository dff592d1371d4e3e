use gloo_net::http::Request;
use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, ContactChannel, EmailRelay};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("some fields need attention")]
    Invalid(FieldErrors),
    #[error("request failed: {0}")]
    Network(String),
    #[error("email relay answered {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("could not open WhatsApp")]
    Redirect,
}

impl From<gloo_net::Error> for ContactError {
    fn from(err: gloo_net::Error) -> Self {
        ContactError::Network(err.to_string())
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

#[derive(Serialize, Debug)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    pub phone: String,
    pub message: String,
    pub reply_to: String,
    pub sent_at: String,
}

#[derive(Serialize, Debug)]
pub struct EmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("Email is required");
        } else if !is_valid_email(email) {
            errors.email = Some("Please enter a valid email address");
        }
        if self.message.trim().is_empty() {
            errors.message = Some("Message is required");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn summary(&self) -> String {
        let mut text = format!(
            "Hello Swim Designers!\n\nName: {}\nEmail: {}\n",
            self.name.trim(),
            self.email.trim()
        );
        if !self.phone.trim().is_empty() {
            text.push_str(&format!("Phone: {}\n", self.phone.trim()));
        }
        text.push_str(&format!("\n{}", self.message.trim()));
        text
    }

    pub fn whatsapp_link(&self, number: &str) -> String {
        format!("https://wa.me/{}?text={}", number, urlencoding::encode(&self.summary()))
    }

    pub fn email_request<'a>(&self, relay: &'a EmailRelay, sent_at: String) -> EmailRequest<'a> {
        EmailRequest {
            service_id: relay.service_id,
            template_id: relay.template_id,
            user_id: relay.public_key,
            template_params: TemplateParams {
                user_name: self.name.trim().to_string(),
                user_email: self.email.trim().to_string(),
                phone: self.phone.trim().to_string(),
                message: self.message.trim().to_string(),
                reply_to: self.email.trim().to_string(),
                sent_at,
            },
        }
    }
}

async fn send_email(form: &ContactForm, relay: &EmailRelay) -> Result<(), ContactError> {
    let sent_at = chrono::Local::now().format("%B %-d, %Y %H:%M (UTC%:z)").to_string();
    let response = Request::post(relay.endpoint)
        .json(&form.email_request(relay, sent_at))?
        .send()
        .await?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ContactError::Rejected { status, body });
    }
    info!("contact message relayed by email");
    Ok(())
}

fn open_whatsapp(form: &ContactForm) -> Result<(), ContactError> {
    let window = web_sys::window().ok_or(ContactError::Redirect)?;
    match window.open_with_url_and_target(&form.whatsapp_link(config::WHATSAPP_NUMBER), "_blank") {
        Ok(Some(_)) => {
            info!("contact message handed to WhatsApp");
            Ok(())
        }
        _ => Err(ContactError::Redirect),
    }
}

pub async fn submit(form: ContactForm, channel: ContactChannel) -> Result<(), ContactError> {
    form.validate().map_err(ContactError::Invalid)?;
    match channel {
        ContactChannel::Email => send_email(&form, &config::EMAIL_RELAY).await,
        ContactChannel::WhatsApp => open_whatsapp(&form),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            phone: String::new(),
            message: "Quote for a rooftop pool, please.".to_string(),
        }
    }

    #[test]
    fn accepts_reasonable_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "plain", "@example.com", "a@b", "a@.com", "a@com.", "a b@c.de", "a@b@c.de"] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn validate_reports_each_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.message, Some("Message is required"));

        let bad_email = ContactForm { email: "nope".to_string(), ..filled() };
        let errors = bad_email.validate().unwrap_err();
        assert_eq!(errors.email, Some("Please enter a valid email address"));
        assert!(errors.name.is_none());

        assert!(filled().validate().is_ok());
    }

    #[test]
    fn whitespace_only_fields_are_empty() {
        let form = ContactForm { name: "   ".to_string(), ..filled() };
        assert_eq!(form.validate().unwrap_err().name, Some("Name is required"));
    }

    #[test]
    fn whatsapp_link_is_prefilled() {
        let link = filled().whatsapp_link("15550100");
        assert!(link.starts_with("https://wa.me/15550100?text=Hello%20Swim%20Designers%21"));
        assert!(link.contains("priya%40example.com"));
        assert!(!link.contains("Phone"));
        assert!(!link.contains(' '));

        let with_phone = ContactForm { phone: "+1 555".to_string(), ..filled() };
        assert!(with_phone.whatsapp_link("1").contains("Phone%3A%20%2B1%20555"));
    }

    #[test]
    fn email_request_matches_relay_format() {
        let relay = EmailRelay {
            endpoint: "https://relay.test/send",
            service_id: "svc",
            template_id: "tpl",
            public_key: "key",
        };
        let request = filled().email_request(&relay, "now".to_string());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["template_id"], "tpl");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["user_name"], "Priya");
        assert_eq!(json["template_params"]["reply_to"], "priya@example.com");
        assert_eq!(json["template_params"]["sent_at"], "now");
    }
}

use anyhow::Context;
use async_trait::async_trait;
use domain_schedule::{model::vo::MailContent, service::MailService};
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::info;
use typed_builder::TypedBuilder;

/// SMTP 経由のメール送信
///
/// 資格情報は起動時に設定から渡される。環境を直接読むグローバルは
/// 持たない。
#[derive(TypedBuilder, Clone)]
pub struct SmtpMailServiceImpl {
    #[builder(default = "smtp.gmail.com".into(), setter(into))]
    smtp_server: String,
    #[builder(default = 587)]
    smtp_port: u16,
    #[builder(default = true)]
    use_tls: bool,
    #[builder(default)]
    username: Option<String>,
    #[builder(default)]
    password: Option<String>,
    #[builder(default)]
    default_sender: Option<String>,
    #[builder(default = true)]
    enabled: bool,
}

#[async_trait]
impl MailService for SmtpMailServiceImpl {
    fn is_configured(&self) -> bool {
        self.enabled
            && self.username.is_some()
            && self.password.is_some()
            && self.default_sender.is_some()
    }

    async fn send(&self, to_addresses: &[String], content: &MailContent) -> anyhow::Result<()> {
        if !self.is_configured() {
            anyhow::bail!("mail is not configured");
        }
        if to_addresses.is_empty() {
            anyhow::bail!("no recipient addresses");
        }

        let username = self.username.clone().context("mail username missing")?;
        let password = self.password.clone().context("mail password missing")?;
        let sender: Mailbox = self
            .default_sender
            .as_deref()
            .context("mail sender missing")?
            .parse()
            .context("invalid sender address")?;

        let mut builder = Message::builder().from(sender).subject(content.subject.clone());
        for address in to_addresses {
            builder = builder.to(address
                .parse::<Mailbox>()
                .with_context(|| format!("invalid recipient address: {address}"))?);
        }
        let message = builder.multipart(MultiPart::alternative_plain_html(
            content.text_body.clone(),
            content.html_body.clone(),
        ))?;

        let transport = if self.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_server)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.smtp_server)
        }
        .port(self.smtp_port)
        .credentials(Credentials::new(username, password))
        .build();

        transport.send(message).await?;
        info!("mail sent to {}", to_addresses.join(", "));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_without_credentials() {
        let service = SmtpMailServiceImpl::builder().build();
        assert!(!service.is_configured());
    }

    #[test]
    fn configured_with_full_credentials() {
        let service = SmtpMailServiceImpl::builder()
            .username(Some("user".to_string()))
            .password(Some("pass".to_string()))
            .default_sender(Some("noreply@example.com".to_string()))
            .build();
        assert!(service.is_configured());
    }

    #[test]
    fn disabled_flag_wins_over_credentials() {
        let service = SmtpMailServiceImpl::builder()
            .username(Some("user".to_string()))
            .password(Some("pass".to_string()))
            .default_sender(Some("noreply@example.com".to_string()))
            .enabled(false)
            .build();
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn send_refuses_when_unconfigured() {
        let service = SmtpMailServiceImpl::builder().build();
        let result = service.send(&["a@example.com".to_string()], &MailContent::default()).await;
        assert!(result.is_err());
    }
}

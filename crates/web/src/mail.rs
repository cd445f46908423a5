use anyhow::{Context, Result};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use storage::dto::order::OrderResponse;
use storage::models::Competition;

use crate::config::MailConfig;

/// Sends the "new order" notification mail to the configured stakeholder
/// address. In development mode the rendered message is logged instead.
#[derive(Clone)]
pub struct MailNotifier {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Mailbox,
    notify_to: Mailbox,
}

impl MailNotifier {
    pub fn new(config: &MailConfig) -> Result<Self> {
        let transport = if config.development_mode {
            None
        } else {
            let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .context("Cannot build SMTP transport")?
                .port(config.smtp_port)
                .credentials(Credentials::new(
                    config.smtp_username.clone(),
                    config.smtp_password.clone(),
                ))
                .build();
            Some(transport)
        };

        Ok(Self {
            transport,
            from: config
                .from
                .parse()
                .context("MAIL_FROM is not a valid mailbox")?,
            notify_to: config
                .notify_to
                .parse()
                .context("MAIL_NOTIFY_TO is not a valid mailbox")?,
        })
    }

    pub async fn send_new_order_notify(
        &self,
        order: &OrderResponse,
        competition: &Competition,
    ) -> Result<()> {
        let subject = format!("New order #{} for {}", order.id, competition.name);
        let body = render_order_mail(order, competition);

        let Some(transport) = &self.transport else {
            tracing::info!("Mail (development mode) '{}':\n{}", subject, body);
            return Ok(());
        };

        let message = Message::builder()
            .from(self.from.clone())
            .to(self.notify_to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .context("Cannot build notification message")?;

        transport
            .send(message)
            .await
            .context("Cannot send notification mail")?;

        Ok(())
    }
}

fn render_order_mail(order: &OrderResponse, competition: &Competition) -> String {
    let mut lines = vec![
        format!("New order #{} received.", order.id),
        String::new(),
        format!("Competition: {} ({})", competition.name, competition.starts_on),
        format!(
            "Entrant: {} {} {}",
            order.last_name,
            order.first_name,
            order.middle_name.as_deref().unwrap_or("")
        )
        .trim_end()
        .to_string(),
        format!("Born: {}, gender: {}", order.birthdate, order.gender),
        format!("Club: {}", order.club_name),
        format!("Contact: {} / {}", order.email, order.phone),
    ];

    if !order.races.is_empty() {
        lines.push(String::new());
        lines.push("Races:".to_string());
        for race in &order.races {
            lines.push(format!("  - {}m {}", race.distance_m, race.style));
        }
    }

    if !order.relays.is_empty() {
        lines.push(String::new());
        lines.push("Relays:".to_string());
        for relay in &order.relays {
            lines.push(format!(
                "  - {}m {} (team of {})",
                relay.distance_m, relay.style, relay.team_size
            ));
        }
    }

    if let Some(cryathlon) = &order.cryathlon {
        lines.push(String::new());
        lines.push(format!("Cryatlon: {}", cryathlon.name));
    }

    if let Some(additional) = &order.additional {
        lines.push(String::new());
        lines.push(format!("Additional notes: {}", additional));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use storage::dto::cryatlon::CryatlonResponse;
    use storage::dto::race::RaceResponse;

    fn competition() -> Competition {
        Competition {
            id: 1,
            name: "Winter Cup".into(),
            location: Some("Kharkiv".into()),
            starts_on: NaiveDate::from_ymd_opt(2026, 12, 5).unwrap(),
            registration_open: true,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn order() -> OrderResponse {
        OrderResponse {
            id: 42,
            competition_id: 1,
            first_name: "Olha".into(),
            last_name: "Bondar".into(),
            middle_name: None,
            birthdate: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
            gender: "female".into(),
            club_name: "Dolphin".into(),
            location: None,
            email: "olha@example.com".into(),
            phone: "+380501234567".into(),
            races: vec![RaceResponse {
                id: 2,
                competition_id: 1,
                distance_m: 100,
                style: "freestyle".into(),
                gender: None,
                description: None,
            }],
            relays: vec![],
            cryathlon: Some(CryatlonResponse {
                id: 3,
                competition_id: 1,
                name: "Ice Mile".into(),
                description: None,
            }),
            additional: Some("wheelchair access needed".into()),
            status: "new".into(),
            processed: false,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn mail_body_lists_chosen_activities() {
        let body = render_order_mail(&order(), &competition());
        assert!(body.contains("New order #42"));
        assert!(body.contains("Winter Cup"));
        assert!(body.contains("100m freestyle"));
        assert!(body.contains("Cryatlon: Ice Mile"));
        assert!(body.contains("wheelchair access needed"));
        assert!(!body.contains("Relays:"));
    }

    #[test]
    fn mail_body_omits_empty_sections() {
        let mut order = order();
        order.races.clear();
        order.cryathlon = None;
        order.additional = None;
        let body = render_order_mail(&order, &competition());
        assert!(!body.contains("Races:"));
        assert!(!body.contains("Cryatlon:"));
        assert!(!body.contains("Additional notes"));
    }

    #[test]
    fn development_notifier_builds_without_smtp() {
        let config = MailConfig {
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from: "noreply@example.com".into(),
            notify_to: "orders@example.com".into(),
            development_mode: true,
        };
        assert!(MailNotifier::new(&config).is_ok());
    }
}

use super::layout::{display_name, format_money, present, HtmlBody};
use super::EmailTemplate;
use crate::domain::{DisputeInitiated, DisputeMessage, DisputeResolved, DisputeResponded};

const DEFAULT_REFUND_CURRENCY: &str = "USD";

impl EmailTemplate for DisputeResolved {
    fn subject(&self) -> String {
        format!("✅ Dispute Resolved - {}", self.invoice_number)
    }

    fn html_body(&self) -> String {
        let refund = self.partial_refund().map(|amount| {
            format!(
                "{} {}",
                format_money(amount),
                present(&self.currency).unwrap_or(DEFAULT_REFUND_CURRENCY)
            )
        });

        HtmlBody::new()
            .heading("Dispute Resolved")
            .greeting(display_name(&self.name))
            .invoice_sentence(
                "The dispute for invoice",
                &self.invoice_number,
                " has been resolved.",
            )
            .field("Resolution", &self.resolution)
            .optional_field("Action", present(&self.action))
            .optional_field("Refund Amount", refund.as_deref())
            .finish()
    }
}

impl EmailTemplate for DisputeResponded {
    fn subject(&self) -> String {
        format!("💬 Dispute Response - {}", self.invoice_number)
    }

    fn html_body(&self) -> String {
        HtmlBody::new()
            .heading("Dispute Response")
            .greeting(&self.name)
            .invoice_sentence(
                "A response has been made to the dispute for invoice",
                &self.invoice_number,
                ".",
            )
            .field("Response", &self.response)
            .finish()
    }
}

impl EmailTemplate for DisputeInitiated {
    fn subject(&self) -> String {
        format!("⚠️ Dispute Filed - {}", self.invoice_number)
    }

    fn html_body(&self) -> String {
        HtmlBody::new()
            .heading("Dispute Filed")
            .greeting(display_name(&self.name))
            .invoice_sentence(
                "A dispute has been filed for invoice",
                &self.invoice_number,
                ".",
            )
            .optional_field("Filed by", present(&self.initiated_by))
            .field("Reason", &self.reason)
            .optional_field("Requested action", present(&self.requested_action))
            .finish()
    }
}

impl EmailTemplate for DisputeMessage {
    fn subject(&self) -> String {
        format!("💬 New Dispute Message - {}", self.invoice_number)
    }

    fn html_body(&self) -> String {
        HtmlBody::new()
            .heading("New Dispute Message")
            .greeting(display_name(&self.name))
            .invoice_sentence(
                "A new message has been posted to the dispute for invoice",
                &self.invoice_number,
                ".",
            )
            .optional_field("From", present(&self.sender_type))
            .message_box(&self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved() -> DisputeResolved {
        DisputeResolved {
            to: "f@x.com".to_string(),
            name: None,
            invoice_number: "INV-10".to_string(),
            resolution: "Funds split between parties".to_string(),
            action: None,
            refund_amount: None,
            currency: None,
        }
    }

    fn initiated() -> DisputeInitiated {
        DisputeInitiated {
            to: "f@x.com".to_string(),
            name: None,
            invoice_number: "INV-11".to_string(),
            reason: "Missed deadline".to_string(),
            initiated_by: None,
            requested_action: None,
        }
    }

    fn message() -> DisputeMessage {
        DisputeMessage {
            to: "f@x.com".to_string(),
            name: None,
            invoice_number: "INV-12".to_string(),
            message: "Can you share the final files?".to_string(),
            sender_type: None,
        }
    }

    #[test]
    fn test_dispute_resolved_minimal() {
        let rendered = resolved().render();

        assert_eq!(rendered.subject, "✅ Dispute Resolved - INV-10");
        assert!(rendered.html_body.contains("Hi there,"));
        assert!(rendered.html_body.contains("<p><strong>Resolution:</strong> Funds split between parties</p>"));
        assert!(!rendered.html_body.contains("Action:"));
        assert!(!rendered.html_body.contains("Refund Amount:"));
    }

    #[test]
    fn test_dispute_resolved_partial_refund() {
        let rendered = DisputeResolved {
            name: Some("Cleo".to_string()),
            action: Some("refund_partial".to_string()),
            refund_amount: Some(40.0),
            currency: Some("USDC".to_string()),
            ..resolved()
        }
        .render();

        assert!(rendered.html_body.contains("Hi Cleo,"));
        assert!(rendered.html_body.contains("<p><strong>Action:</strong> refund_partial</p>"));
        assert!(rendered.html_body.contains("<p><strong>Refund Amount:</strong> $40.00 USDC</p>"));
    }

    #[test]
    fn test_dispute_resolved_refund_currency_defaults_to_usd() {
        let rendered = DisputeResolved {
            action: Some("refund_partial".to_string()),
            refund_amount: Some(12.5),
            ..resolved()
        }
        .render();

        assert!(rendered.html_body.contains("$12.50 USD</p>"));
    }

    #[test]
    fn test_dispute_resolved_other_action_hides_refund() {
        let rendered = DisputeResolved {
            action: Some("release_to_freelancer".to_string()),
            refund_amount: Some(12.5),
            ..resolved()
        }
        .render();

        assert!(rendered.html_body.contains("<p><strong>Action:</strong> release_to_freelancer</p>"));
        assert!(!rendered.html_body.contains("Refund Amount:"));
    }

    #[test]
    fn test_dispute_responded() {
        let rendered = DisputeResponded {
            to: "c@x.com".to_string(),
            name: "Bob".to_string(),
            invoice_number: "INV-13".to_string(),
            response: "Files were sent on Monday".to_string(),
        }
        .render();

        assert_eq!(rendered.subject, "💬 Dispute Response - INV-13");
        assert!(rendered.html_body.contains("Hi Bob,"));
        assert!(rendered.html_body.contains("<p><strong>Response:</strong> Files were sent on Monday</p>"));
    }

    #[test]
    fn test_dispute_initiated_minimal() {
        let rendered = initiated().render();

        assert_eq!(rendered.subject, "⚠️ Dispute Filed - INV-11");
        assert!(rendered.html_body.contains("<h2>Dispute Filed</h2>"));
        assert!(rendered.html_body.contains("Hi there,"));
        assert!(rendered.html_body.contains("<p><strong>Reason:</strong> Missed deadline</p>"));
        assert!(!rendered.html_body.contains("Filed by:"));
        assert!(!rendered.html_body.contains("Requested action:"));
    }

    #[test]
    fn test_dispute_initiated_full() {
        let html = DisputeInitiated {
            name: Some("Ana".to_string()),
            initiated_by: Some("client".to_string()),
            requested_action: Some("Partial refund".to_string()),
            ..initiated()
        }
        .html_body();

        assert!(html.contains("Hi Ana,"));
        assert!(html.contains("<p><strong>Filed by:</strong> client</p>"));
        assert!(html.contains("<p><strong>Requested action:</strong> Partial refund</p>"));
        assert!(html.find("Filed by:").unwrap() < html.find("Reason:").unwrap());
    }

    #[test]
    fn test_dispute_message_minimal() {
        let rendered = message().render();

        assert_eq!(rendered.subject, "💬 New Dispute Message - INV-12");
        assert!(rendered.html_body.contains("Hi there,"));
        assert!(rendered.html_body.contains("<p style=\"margin: 0;\">Can you share the final files?</p>"));
        assert!(!rendered.html_body.contains("From:"));
    }

    #[test]
    fn test_dispute_message_with_sender() {
        let rendered = DisputeMessage {
            name: Some("Ana".to_string()),
            sender_type: Some("admin".to_string()),
            ..message()
        }
        .render();

        assert!(rendered.html_body.contains("Hi Ana,"));
        assert!(rendered.html_body.contains("<p><strong>From:</strong> admin</p>"));
    }
}

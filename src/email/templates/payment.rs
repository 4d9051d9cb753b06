use super::layout::HtmlBody;
use super::EmailTemplate;
use crate::domain::PaymentReceived;

impl EmailTemplate for PaymentReceived {
    fn subject(&self) -> String {
        format!("💰 Payment Received - {}", self.invoice_number)
    }

    fn html_body(&self) -> String {
        HtmlBody::new()
            .heading_dark(&format!("Hey {}! 🎉", self.freelancer_name))
            .invoice_sentence(
                "You received a payment for invoice",
                &self.invoice_number,
                ".",
            )
            .amount_banner(self.amount, &self.currency)
            .muted(&format!("From: {}", self.client_name))
            .finish()
    }
}

use super::layout::{display_name, present, HtmlBody};
use super::EmailTemplate;
use crate::domain::{DisputeCreated, EscrowDisputed, EscrowReleased};

/// Escrow balances are always held in USDC
const ESCROW_CURRENCY: &str = "USDC";

impl EmailTemplate for EscrowReleased {
    fn subject(&self) -> String {
        format!("✅ Escrow Released - {}", self.invoice_number)
    }

    fn html_body(&self) -> String {
        let mut body = HtmlBody::new()
            .heading("Escrow Released! 🎉")
            .greeting(display_name(&self.freelancer_name))
            .invoice_sentence(
                "The escrow for invoice",
                &self.invoice_number,
                " has been released.",
            );

        // A zero amount is treated as unknown
        if let Some(amount) = self.amount.filter(|a| *a != 0.0) {
            body = body.amount_banner(amount, ESCROW_CURRENCY);
        }

        body.optional_field("Released by", present(&self.client_email))
            .optional_field("Notes", present(&self.notes))
            .finish_spaced()
    }
}

impl EmailTemplate for EscrowDisputed {
    fn subject(&self) -> String {
        format!("⚠️ Escrow Disputed - {}", self.invoice_number)
    }

    fn html_body(&self) -> String {
        HtmlBody::new()
            .heading("Escrow Dispute Filed")
            .greeting(display_name(&self.name))
            .invoice_sentence(
                "A dispute has been filed for invoice",
                &self.invoice_number,
                ".",
            )
            .optional_field("Client", present(&self.client_email))
            .field("Reason", &self.reason)
            .optional_field("Requested action", present(&self.requested_action))
            .finish()
    }
}

/// Same template and subject as an escrow dispute
impl EmailTemplate for DisputeCreated {
    fn subject(&self) -> String {
        EscrowDisputed::from(self.clone()).subject()
    }

    fn html_body(&self) -> String {
        EscrowDisputed::from(self.clone()).html_body()
    }
}

use super::layout::{display_name, escape_html, format_date, format_money, present, HtmlBody};
use super::EmailTemplate;
use crate::domain::InvoiceCreated;

impl EmailTemplate for InvoiceCreated {
    fn subject(&self) -> String {
        format!("Invoice {} from LancePay", self.invoice_number)
    }

    fn html_body(&self) -> String {
        let due_date = self.due_date.map(format_date);

        HtmlBody::new()
            .heading(&format!("Invoice {}", self.invoice_number))
            .greeting(display_name(&self.client_name))
            .paragraph_html(&format!(
                "You have received an invoice for <strong>{} {}</strong>.",
                format_money(self.amount),
                escape_html(&self.currency)
            ))
            .optional_field("Description", present(&self.description))
            .optional_field("Due Date", due_date.as_deref())
            .button(&self.payment_link, "Pay Now")
            .finish_spaced()
    }
}

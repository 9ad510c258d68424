//! Invoice operations.

use crate::error::AppError;
use crate::model::{Invoice, InvoiceDetail, InvoiceSummary, InvoiceUpdate, NewInvoice};
use crate::store::BizStore;
use chrono::NaiveDate;

fn no_such_invoice(id: i32) -> AppError {
    AppError::NotFound(format!("No such invoice: {}", id))
}

/// Paid date after an update: stamped with `today` on the unpaid -> paid transition, cleared
/// when the invoice becomes unpaid, kept otherwise.
fn next_paid_date(current: &Invoice, paid: bool, today: NaiveDate) -> Option<NaiveDate> {
    match (current.paid_date, paid) {
        (_, false) => None,
        (None, true) => Some(today),
        (Some(date), true) => Some(date),
    }
}

pub struct InvoiceService;

impl InvoiceService {
    pub async fn list(store: &dyn BizStore) -> Result<Vec<InvoiceSummary>, AppError> {
        store.list_invoices().await
    }

    pub async fn get(store: &dyn BizStore, id: i32) -> Result<InvoiceDetail, AppError> {
        let invoice = store
            .find_invoice(id)
            .await?
            .ok_or_else(|| no_such_invoice(id))?;
        // comp_code is a foreign key, so a missing company means the row vanished mid-request.
        let company = store
            .find_company(&invoice.comp_code)
            .await?
            .ok_or_else(|| no_such_invoice(id))?;
        Ok(InvoiceDetail::new(invoice, company))
    }

    pub async fn create(store: &dyn BizStore, payload: NewInvoice) -> Result<Invoice, AppError> {
        let invoice = store.insert_invoice(&payload.comp_code, payload.amt).await?;
        tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");
        Ok(invoice)
    }

    /// Update amount and paid state. Reads the current row first to decide the paid date.
    pub async fn update(
        store: &dyn BizStore,
        id: i32,
        payload: InvoiceUpdate,
    ) -> Result<Invoice, AppError> {
        let current = store
            .find_invoice(id)
            .await?
            .ok_or_else(|| no_such_invoice(id))?;
        let paid = payload.paid.unwrap_or(current.paid);
        let paid_date = next_paid_date(&current, paid, chrono::Local::now().date_naive());
        store
            .update_invoice(id, payload.amt, paid, paid_date)
            .await?
            .ok_or_else(|| no_such_invoice(id))
    }

    pub async fn delete(store: &dyn BizStore, id: i32) -> Result<(), AppError> {
        store
            .delete_invoice(id)
            .await?
            .ok_or_else(|| no_such_invoice(id))?;
        tracing::info!(id, "invoice deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(paid_date: Option<NaiveDate>) -> Invoice {
        Invoice {
            id: 1,
            comp_code: "acme".into(),
            amt: 100.0,
            paid: paid_date.is_some(),
            add_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            paid_date,
        }
    }

    #[test]
    fn paying_stamps_today() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(next_paid_date(&invoice(None), true, today), Some(today));
    }

    #[test]
    fn repaying_keeps_original_date() {
        let paid_on = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(next_paid_date(&invoice(Some(paid_on)), true, today), Some(paid_on));
    }

    #[test]
    fn unpaying_clears_date() {
        let paid_on = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(next_paid_date(&invoice(Some(paid_on)), false, today), None);
    }
}

// src/models/purchase.rs

//! Purchase history records.

use serde::{Deserialize, Serialize};

/// Identifiers of one purchase transaction.
///
/// The three values are only meaningful together; they are the arguments the
/// site's detail popup is opened with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub order_no: String,
    pub barcode: String,
    pub issue_no: String,
}

/// One slot of a purchase detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseDetail {
    /// Slot label (A through E)
    pub slot: String,

    /// Purchase mode label as shown on the page, whitespace-normalized
    pub mode: String,

    /// Selected numbers in page order
    pub numbers: Vec<u32>,
}

/// Everything read from a purchase detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseDetailPage {
    /// Draw round the purchase is for
    pub round: u32,
    pub details: Vec<PurchaseDetail>,
}

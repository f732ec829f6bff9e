//! Payment gateway notifications.
//!
//! These are flat documents with snake_case field names and no shared
//! header, so they decode through `codec::decode` directly.

use serde::{Deserialize, Serialize};

use crate::protocol::codec::{self, Parsed};

/// Native (QR code) payment request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativePay {
    pub appid: String,
    pub mch_id: String,
    pub is_subscribe: String,
    pub nonce_str: String,
    pub product_id: String,
    pub sign: String,
}

impl NativePay {
    pub fn parse(buf: &[u8]) -> Parsed<Self> {
        codec::decode(buf)
    }
}

/// One coupon / discount batch applied to a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coupon<'a> {
    pub batch_id: &'a str,
    pub id: &'a str,
    pub fee: i64,
}

/// Payment result callback.
///
/// The gateway numbers coupon fields (`coupon_id_1`, `coupon_id_2`, ...)
/// instead of nesting them; the first four slots are mapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayNotify {
    pub appid: String,
    pub mch_id: String,
    pub device_info: String,
    pub nonce_str: String,
    pub sign: String,
    pub result_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub err_code: String,
    #[serde(rename = "err_code_des", skip_serializing_if = "String::is_empty")]
    pub err_description: String,
    pub openid: String,
    pub is_subscribe: String,
    pub trade_type: String,
    pub bank_type: String,
    /// In cents.
    pub total_fee: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fee_type: String,
    pub cash_fee: String,
    pub cash_fee_type: String,
    pub coupon_fee: i64,
    pub coupon_count: i64,
    pub transaction_id: String,
    pub out_trade_no: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub attach: String,
    /// yyyyMMddHHmmss
    pub time_end: String,

    #[serde(rename = "coupon_batch_id_1", skip_serializing_if = "String::is_empty")]
    pub coupon_batch_id1: String,
    #[serde(rename = "coupon_id_1", skip_serializing_if = "String::is_empty")]
    pub coupon_id1: String,
    #[serde(rename = "coupon_fee_1", skip_serializing_if = "is_zero")]
    pub coupon_fee1: i64,
    #[serde(rename = "coupon_batch_id_2", skip_serializing_if = "String::is_empty")]
    pub coupon_batch_id2: String,
    #[serde(rename = "coupon_id_2", skip_serializing_if = "String::is_empty")]
    pub coupon_id2: String,
    #[serde(rename = "coupon_fee_2", skip_serializing_if = "is_zero")]
    pub coupon_fee2: i64,
    #[serde(rename = "coupon_batch_id_3", skip_serializing_if = "String::is_empty")]
    pub coupon_batch_id3: String,
    #[serde(rename = "coupon_id_3", skip_serializing_if = "String::is_empty")]
    pub coupon_id3: String,
    #[serde(rename = "coupon_fee_3", skip_serializing_if = "is_zero")]
    pub coupon_fee3: i64,
    #[serde(rename = "coupon_batch_id_4", skip_serializing_if = "String::is_empty")]
    pub coupon_batch_id4: String,
    #[serde(rename = "coupon_id_4", skip_serializing_if = "String::is_empty")]
    pub coupon_id4: String,
    #[serde(rename = "coupon_fee_4", skip_serializing_if = "is_zero")]
    pub coupon_fee4: i64,
}

impl PayNotify {
    pub fn parse(buf: &[u8]) -> Parsed<Self> {
        codec::decode(buf)
    }

    pub fn is_success(&self) -> bool {
        self.result_code == "SUCCESS"
    }

    /// Non-empty coupon slots, in slot order.
    pub fn coupons(&self) -> Vec<Coupon<'_>> {
        [
            (&self.coupon_batch_id1, &self.coupon_id1, self.coupon_fee1),
            (&self.coupon_batch_id2, &self.coupon_id2, self.coupon_fee2),
            (&self.coupon_batch_id3, &self.coupon_id3, self.coupon_fee3),
            (&self.coupon_batch_id4, &self.coupon_id4, self.coupon_fee4),
        ]
        .into_iter()
        .filter(|(batch_id, id, fee)| !batch_id.is_empty() || !id.is_empty() || *fee != 0)
        .map(|(batch_id, id, fee)| Coupon {
            batch_id,
            id,
            fee,
        })
        .collect()
    }
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

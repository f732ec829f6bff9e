//! Card (coupon / membership) events. Personal accounts only.

use serde::{Deserialize, Serialize};

use crate::protocol::envelope::event_body;
use crate::protocol::header::event_type;

event_body! {
    CardPassCheck => event_type::CARD_PASS_CHECK,
    CardNotPassCheck => event_type::CARD_NOT_PASS_CHECK,
    UserGetCard => event_type::USER_GET_CARD,
    UserDelCard => event_type::USER_DEL_CARD,
    UserViewCard => event_type::USER_VIEW_CARD,
    UserConsumeCard => event_type::USER_CONSUME_CARD,
}

/// The card passed review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CardPassCheck {
    pub event: String,
    pub card_id: String,
}

/// The card was rejected in review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CardNotPassCheck {
    pub event: String,
    pub card_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserGetCard {
    pub event: String,
    pub card_id: String,
    /// 1 when the card was a gift from a friend, 0 otherwise.
    pub is_give_by_friend: i32,
    /// Gifting user's OpenID, set when `is_give_by_friend` is 1.
    pub friend_user_name: String,
    pub user_card_code: String,
    /// Claim scene, for channel statistics.
    pub outer_id: i64,
}

impl UserGetCard {
    pub fn is_gift(&self) -> bool {
        self.is_give_by_friend == 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserDelCard {
    pub event: String,
    pub card_id: String,
    /// Merchant-defined code; empty for platform-generated codes.
    pub user_card_code: String,
}

/// The user opened a membership card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserViewCard {
    pub event: String,
    pub card_id: String,
    pub user_card_code: String,
}

/// The card was redeemed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserConsumeCard {
    pub event: String,
    pub card_id: String,
    pub user_card_code: String,
}

//! Payment details: the bank account withdrawals are paid out to.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

/// Bank account on file. One per user; wire shape matches the backend
/// exactly, so no separate wire type is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub bank_name: String,
    pub ifsc: String,
    pub account_number: String,
    pub account_holder_name: String,
}

/// Body for registering payment details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPaymentDetailsRequest {
    pub bank_name: String,
    pub ifsc: String,
    pub account_number: String,
    pub account_holder_name: String,
}

impl PaymentDetails {
    /// Account number masked for display: all but the last four digits.
    pub fn masked_account_number(&self) -> String {
        let len = self.account_number.chars().count();
        if len <= 4 {
            return self.account_number.clone();
        }
        let visible: String = self
            .account_number
            .chars()
            .skip(len - 4)
            .collect();
        format!("{}{}", "*".repeat(len - 4), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "bankName": "First National",
            "ifsc": "FNB0001234",
            "accountNumber": "12345678901",
            "accountHolderName": "Ada Lovelace"
        }"#;
        let pd: PaymentDetails = serde_json::from_str(json).unwrap();
        assert_eq!(pd.bank_name, "First National");
    }

    #[test]
    fn test_masked_account_number() {
        let pd = PaymentDetails {
            bank_name: "First National".into(),
            ifsc: "FNB0001234".into(),
            account_number: "12345678901".into(),
            account_holder_name: "Ada".into(),
        };
        assert_eq!(pd.masked_account_number(), "*******8901");
    }
}

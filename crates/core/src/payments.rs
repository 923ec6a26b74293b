//! Payment methods
//!
//! Payment methods are static labels: no gateway is contacted at checkout.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// A way of paying for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Credit or debit card.
    CreditCard,

    /// Cash on delivery.
    Cod,

    /// E-wallet such as MoMo or ZaloPay.
    EWallet,

    /// Bank transfer.
    BankTransfer,
}

/// Unknown payment method identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

/// How a payment method is presented at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethodDescriptor {
    /// The method described.
    pub method: PaymentMethod,

    /// Display name.
    pub name: &'static str,

    /// Short description.
    pub description: &'static str,

    /// Whether customers can currently choose it.
    pub is_enabled: bool,
}

impl PaymentMethod {
    /// Every method, in the order shown at checkout.
    pub const ALL: [Self; 4] = [Self::CreditCard, Self::Cod, Self::EWallet, Self::BankTransfer];

    /// Stable identifier stored on orders.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Cod => "cod",
            Self::EWallet => "e_wallet",
            Self::BankTransfer => "bank_transfer",
        }
    }

    /// Checkout presentation for this method.
    pub const fn descriptor(self) -> PaymentMethodDescriptor {
        let (name, description, is_enabled) = match self {
            // Card payments need a gateway, which is not wired up.
            Self::CreditCard => ("Thẻ tín dụng/Ghi nợ", "Visa, Mastercard, JCB", false),
            Self::Cod => (
                "Thanh toán khi nhận hàng (COD)",
                "Thanh toán bằng tiền mặt khi nhận hàng",
                true,
            ),
            Self::EWallet => ("Ví điện tử", "MoMo, ZaloPay, VNPay", true),
            Self::BankTransfer => (
                "Chuyển khoản ngân hàng",
                "Chuyển khoản qua tài khoản ngân hàng",
                true,
            ),
        };

        PaymentMethodDescriptor {
            method: self,
            name,
            description,
            is_enabled,
        }
    }

    /// Whether customers can currently choose this method.
    pub const fn is_enabled(self) -> bool {
        self.descriptor().is_enabled
    }

    /// Descriptors for every method.
    pub fn descriptors() -> [PaymentMethodDescriptor; 4] {
        Self::ALL.map(Self::descriptor)
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| UnknownPaymentMethod(value.to_string()))
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

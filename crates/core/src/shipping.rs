//! Shipping
//!
//! The storefront charges a flat fee and offers the same two methods for
//! every destination.

use crate::validation::Violations;

/// Fee charged for standard delivery, and for every order at checkout.
pub const STANDARD_SHIPPING_FEE: u64 = 30_000;

/// Fee advertised for express delivery.
pub const EXPRESS_SHIPPING_FEE: u64 = 50_000;

/// Delivery estimate recorded on orders.
pub const STANDARD_DELIVERY_ESTIMATE: &str = "3-5 ngày";

/// A delivery option offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingMethod {
    /// Stable identifier, e.g. `standard`.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Fee in dong.
    pub fee: u64,

    /// Estimated delivery window.
    pub estimated_delivery: &'static str,
}

/// Methods offered for every destination.
pub const SHIPPING_METHODS: [ShippingMethod; 2] = [
    ShippingMethod {
        id: "standard",
        name: "Giao hàng tiêu chuẩn",
        fee: STANDARD_SHIPPING_FEE,
        estimated_delivery: STANDARD_DELIVERY_ESTIMATE,
    },
    ShippingMethod {
        id: "express",
        name: "Giao hàng hỏa tốc",
        fee: EXPRESS_SHIPPING_FEE,
        estimated_delivery: "1-2 ngày",
    },
];

/// Shipping address fields as received, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawShippingAddress {
    /// Recipient's full name.
    pub full_name: Option<String>,

    /// Recipient's phone number.
    pub phone: Option<String>,

    /// Recipient's email address.
    pub email: Option<String>,

    /// Province identifier.
    pub province_id: Option<String>,

    /// District identifier.
    pub district_id: Option<String>,

    /// Ward identifier.
    pub ward_id: Option<String>,

    /// Street address.
    pub address: Option<String>,
}

/// A validated shipping address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    /// Recipient's full name.
    pub full_name: String,

    /// Recipient's phone number.
    pub phone: String,

    /// Recipient's email address.
    pub email: String,

    /// Province identifier.
    pub province_id: String,

    /// District identifier.
    pub district_id: String,

    /// Ward identifier.
    pub ward_id: String,

    /// Street address.
    pub address: String,
}

impl ShippingAddress {
    /// Validate every field, reporting all problems together.
    ///
    /// # Errors
    ///
    /// Returns the collected [`Violations`] when any field is missing, blank or
    /// malformed.
    pub fn parse(raw: RawShippingAddress) -> Result<Self, Violations> {
        let mut violations = Violations::new();

        let full_name =
            violations.required_text("full_name", raw.full_name, "Full name is required");
        let phone = violations.required_text("phone", raw.phone, "Phone is required");
        let email = violations.required_email("email", raw.email, "Valid email is required");
        let province_id =
            violations.required_text("province_id", raw.province_id, "Province is required");
        let district_id =
            violations.required_text("district_id", raw.district_id, "District is required");
        let ward_id = violations.required_text("ward_id", raw.ward_id, "Ward is required");
        let address = violations.required_text("address", raw.address, "Address is required");

        violations.into_result(|| {
            Some(Self {
                full_name: full_name?,
                phone: phone?,
                email: email?,
                province_id: province_id?,
                district_id: district_id?,
                ward_id: ward_id?,
                address: address?,
            })
        })
    }
}

/// Shipping fee and available methods for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingQuote {
    /// Fee applied at checkout.
    pub fee: u64,

    /// Methods the customer can choose from.
    pub methods: [ShippingMethod; 2],
}

/// Quote shipping to a validated address. Rates are flat, so the destination
/// only has to be well-formed.
pub fn quote(_destination: &ShippingAddress) -> ShippingQuote {
    ShippingQuote {
        fee: STANDARD_SHIPPING_FEE,
        methods: SHIPPING_METHODS,
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn raw_address() -> RawShippingAddress {
        RawShippingAddress {
            full_name: Some("Nguyễn Thị Lan".to_string()),
            phone: Some("0901234567".to_string()),
            email: Some("lan@example.com".to_string()),
            province_id: Some("79".to_string()),
            district_id: Some("760".to_string()),
            ward_id: Some("26734".to_string()),
            address: Some("12 Lê Lợi".to_string()),
        }
    }

    #[test]
    fn parse_accepts_complete_address() -> TestResult {
        let address = ShippingAddress::parse(raw_address())?;

        assert_eq!(address.full_name, "Nguyễn Thị Lan");
        assert_eq!(address.ward_id, "26734");

        Ok(())
    }

    #[test]
    fn parse_reports_every_missing_field() {
        let result = ShippingAddress::parse(RawShippingAddress::default());

        let Err(violations) = result else {
            panic!("empty address should be rejected");
        };

        let fields: Vec<_> = violations.iter().map(|violation| violation.field).collect();

        assert_eq!(
            fields,
            [
                "full_name",
                "phone",
                "email",
                "province_id",
                "district_id",
                "ward_id",
                "address"
            ]
        );
    }

    #[test]
    fn parse_rejects_malformed_email() {
        let result = ShippingAddress::parse(RawShippingAddress {
            email: Some("not-an-email".to_string()),
            ..raw_address()
        });

        assert!(
            matches!(&result, Err(violations) if violations.contains("email")),
            "expected email violation, got {result:?}"
        );
    }

    #[test]
    fn quote_is_flat_for_any_destination() -> TestResult {
        let hanoi = ShippingAddress::parse(RawShippingAddress {
            province_id: Some("01".to_string()),
            ..raw_address()
        })?;
        let saigon = ShippingAddress::parse(raw_address())?;

        assert_eq!(quote(&hanoi), quote(&saigon));
        assert_eq!(quote(&hanoi).fee, 30_000);

        Ok(())
    }

    #[test]
    fn quote_offers_standard_and_express() -> TestResult {
        let methods = quote(&ShippingAddress::parse(raw_address())?).methods;

        assert_eq!(methods[0].id, "standard");
        assert_eq!(methods[0].fee, 30_000);
        assert_eq!(methods[1].id, "express");
        assert_eq!(methods[1].fee, 50_000);

        Ok(())
    }
}

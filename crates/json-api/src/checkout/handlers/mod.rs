//! Checkout Handlers

pub(crate) mod init;
pub(crate) mod payment_info;
pub(crate) mod place_order;
pub(crate) mod validate_shipping;

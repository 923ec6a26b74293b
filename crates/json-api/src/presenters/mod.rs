//! Presenters
//!
//! Display strings derived from records: Vietnamese dates, dong amounts and
//! order status wording. Records themselves stay raw.

pub(crate) mod dates;
pub(crate) mod money;
pub(crate) mod status;

//! Response bodies shared by every handler.
//!
//! Successes are wrapped as `{message, data}`; failures render
//! `{message, errors?}` with the matching status code.

mod envelope;
mod errors;

pub(crate) use envelope::*;
pub(crate) use errors::*;

//! Authentication
//!
//! Every storefront route needs a bearer API token; the middleware resolves it
//! to the user it was issued to.

pub(crate) mod middleware;

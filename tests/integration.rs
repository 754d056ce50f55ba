//! Entry point for integration tests that run the `decohack` binary on scripts.

#[macro_use]
mod integration_impl;

mod integration {
    mod general;
    mod includes;
    mod scenarios;
}

mod catalog;
mod setup;

pub use catalog::{
    fallback_catalog,
    kanto_catalog,
    record,
};
pub use setup::setup_test_environment;

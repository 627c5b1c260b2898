mod data_store;

pub use data_store::DataStore;

pub mod batch_cache;
pub mod data;
pub mod edit;
pub mod layout;
pub mod sink;

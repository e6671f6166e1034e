pub mod alert;
pub mod alert_store;
pub mod budget;
pub mod demo_data;
pub mod usage;

pub mod pressure;
pub mod record;
pub mod regression;

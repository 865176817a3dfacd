pub mod accounts;
pub mod listing;
pub mod mode;
pub mod stat;

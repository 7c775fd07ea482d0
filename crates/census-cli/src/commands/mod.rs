pub mod counts;
pub mod dispatch;
pub mod ptable;

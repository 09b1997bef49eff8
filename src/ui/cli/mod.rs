pub mod confirm;
pub mod drivers;

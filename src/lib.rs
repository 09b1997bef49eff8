pub mod app;
pub mod error;
pub mod report;
pub mod sampling;
pub mod statistics;
pub mod tasks;
pub mod ui;
pub mod visualization;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

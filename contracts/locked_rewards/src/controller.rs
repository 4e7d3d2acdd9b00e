pub mod locked;
pub mod registry;
pub mod settlement;
pub mod stake;
pub mod token;

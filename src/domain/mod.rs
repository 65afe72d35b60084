pub mod activity;
pub mod experiment;
pub mod flow;
pub mod process;
pub mod resource;
pub mod scenario;

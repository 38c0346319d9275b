pub mod entries;
pub mod maintenance;

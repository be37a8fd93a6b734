pub mod vector;
pub mod states;
pub mod params;
pub mod collision;
pub mod forces;
pub mod engine;
pub mod scenario;

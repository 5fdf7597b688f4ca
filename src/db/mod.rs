pub mod audit;
pub mod initialize;
pub mod pool;
pub mod queries;

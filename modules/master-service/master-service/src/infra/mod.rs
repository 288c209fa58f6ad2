pub mod algo;
pub mod in_memory_data;

pub use algo::AlgoService;
pub use in_memory_data::InMemoryDataService;

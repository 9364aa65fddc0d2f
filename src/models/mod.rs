pub mod graph;
pub mod position;
pub mod station;

pub use graph::GraphSpec;
pub use position::ReceiverPosition;
pub use station::StationEntry;

pub mod bounded_queue;
pub mod priority_queue;

pub use bounded_queue::BoundedQueue;
pub use priority_queue::MinHeap;

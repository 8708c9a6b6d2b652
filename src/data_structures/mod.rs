pub mod binary_heap;
pub mod fibonacci_heap;
pub mod item;

pub use binary_heap::BinaryMinHeap;
pub use fibonacci_heap::{FibonacciHandle, FibonacciHeap, FibonacciStats, MergedHandles};
pub use item::{HeapItem, PriorityItem};

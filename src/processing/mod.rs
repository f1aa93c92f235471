//! Generic map/filter/reduce over slices.
//!
//! These are plain generic functions: element and accumulator types are fixed at compile time,
//! so there is no shape to bind and nothing can mismatch at runtime. Use [`crate::synthesis`]
//! when the shape is only known at runtime.
//!
//! - [`map()`]: element-wise transform
//! - [`filter()`]: order-preserving selection
//! - [`reduce()`] / [`reduce_or_default()`]: fold seeded by the first element
//! - [`fold()`]: fold with an explicit seed
//!
//! Each has a `try_*` form for callbacks that can fail. Inputs are borrowed and never mutated.
//!
//! ## Example: filter → map → fold
//!
//! ```rust
//! use rust_hof::processing::{filter, fold, map};
//!
//! let input: Vec<i64> = (1..=10).collect();
//! let odd = filter(|x: &i64| x % 2 == 1, &input);
//! let doubled = map(|x: &i64| x * 2, &odd);
//! let digits = fold(|acc: String, x: &i64| format!("{acc}{x},"), &doubled, String::new());
//!
//! assert_eq!(odd, vec![1, 3, 5, 7, 9]);
//! assert_eq!(digits, "2,6,10,14,18,");
//! ```

pub mod filter;
pub mod map;
pub mod reduce;

pub use filter::{filter, try_filter};
pub use map::{map, try_map};
pub use reduce::{fold, reduce, reduce_or_default, try_fold};

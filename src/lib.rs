//! `rust-hof` provides map, filter and reduce over homogeneous sequences in two flavours:
//!
//! - [`processing`]: plain generic functions over slices, checked entirely at compile time.
//! - [`synthesis`]: callables synthesized at runtime from a declared function shape
//!   ([`signature::Signature`]). The shape is validated when the callable is built, so a
//!   malformed request fails before any element is touched.
//!
//! ## Generic functions
//!
//! ```rust
//! use rust_hof::processing::{filter, fold, map, reduce};
//!
//! assert_eq!(map(|x: &i64| x * 2, &[1, 2, 3, 4, 5]), vec![2, 4, 6, 8, 10]);
//! assert_eq!(filter(|x: &i64| x % 2 == 1, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), vec![1, 3, 5, 7, 9]);
//! assert_eq!(reduce(|a, b: &i64| a + b, &[1, 4, 9, 16, 25]).unwrap(), 55);
//!
//! let digits = fold(
//!     |acc: String, d: &u8| format!("{acc}{}", char::from(b'0' + d)),
//!     &[5, 4, 3, 2, 1],
//!     String::new(),
//! );
//! assert_eq!(digits, "54321");
//! ```
//!
//! ## Runtime synthesis
//!
//! A caller declares a [`synthesis::FnSlot`] with the shape it wants and asks for an
//! implementation to be installed into it. Shapes use a compact text form
//! (`fn(params...) -> ret`, `[T]` for sequences) or JSON.
//!
//! ```rust
//! use rust_hof::callable::Callable;
//! use rust_hof::synthesis::{synthesize_reduce, FnSlot};
//! use rust_hof::types::{Sequence, Value};
//!
//! # fn main() -> Result<(), rust_hof::HofError> {
//! let mut reduce = FnSlot::parse("fn(fn(utf8, int64) -> utf8, [int64], utf8) -> utf8")?;
//! synthesize_reduce(&mut reduce)?;
//!
//! let append_digit = Callable::binary(|acc: String, d: i64| format!("{acc}{d}"));
//! let input = Sequence::from_native(vec![5i64, 4, 3, 2, 1]);
//! let out = reduce.call(&[append_digit.into(), input.into(), Value::from("")])?;
//! assert_eq!(out, Value::from("54321"));
//! # Ok(())
//! # }
//! ```
//!
//! Shapes that do not fit the operation are rejected up front:
//!
//! ```rust
//! use rust_hof::synthesis::{synthesize_map, FnSlot};
//! use rust_hof::HofError;
//!
//! let mut slot = FnSlot::parse("fn(fn(utf8) -> int64, [int64]) -> [int64]").unwrap();
//! let err = synthesize_map(&mut slot).unwrap_err();
//! assert!(matches!(err, HofError::ShapeMismatch { .. }));
//! assert!(!slot.is_installed());
//! ```
//!
//! ### Empty reduce
//!
//! A seedless reduce over an empty sequence fails with [`HofError::EmptyReduce`] by default.
//! Set [`synthesis::SynthesisOptions::empty_reduce`] to
//! [`synthesis::EmptyReducePolicy::ZeroValue`] to get the accumulator type's zero value instead.
//! The generic layer offers the same choice through [`processing::reduce`] and
//! [`processing::reduce_or_default`].
//!
//! ## Modules
//!
//! - [`processing`]: generic map/filter/reduce
//! - [`synthesis`]: bind/install synthesizer, slots, options and observers
//! - [`signature`]: shape descriptors and their text/JSON forms
//! - [`callable`]: typed function values
//! - [`types`]: element type tags and runtime values
//! - [`error`]: the crate's error type

pub mod callable;
pub mod error;
pub mod processing;
pub mod signature;
pub mod synthesis;
pub mod types;

pub use error::{HofError, HofResult};

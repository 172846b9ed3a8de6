//! # Shared Optional Crate
//!
//! A single generic container, [`Optional<T>`], representing a value that may
//! be absent, plus the error raised when an absent value is read.
//!
//! ## Design Principles
//!
//! - **Two States**: an `Optional` is either PRESENT (holds exactly one value)
//!   or EMPTY. The state is fixed at construction.
//! - **Immutability**: no operation mutates the receiver. `map` and `filter`
//!   produce a new instance; borrowed chains go through [`Optional::as_ref`].
//! - **No Recovery**: errors and panics from caller-supplied closures reach the
//!   caller unmodified.
//!
//! ## Usage Example
//!
//! ```
//! use shared_optional::{Optional, OptionalError};
//!
//! let doubled = Optional::of_nullable(Some(5)).map_nullable(|x| Some(x * 2));
//! assert_eq!(doubled.get(), Ok(&10));
//!
//! let filtered = Optional::of(5).filter(|x| *x < 3);
//! assert_eq!(filtered.get(), Err(OptionalError::NoValuePresent));
//!
//! let fallback = Optional::<u32>::empty().get_or_else(|| 100);
//! assert_eq!(fallback, 100);
//! ```

pub mod errors;
pub mod optional;

pub use errors::OptionalError;
pub use optional::Optional;

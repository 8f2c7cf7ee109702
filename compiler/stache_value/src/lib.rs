//! Stache Value - the data a template is rendered against.
//!
//! A [`Value`] is one of five kinds: an object mapping names to values, a
//! string, a list, or one of the two boolean markers. Sections iterate lists,
//! push objects as a new lookup scope, and treat `False` and the empty list as
//! falsy; everything else (including empty strings and empty objects) is
//! truthy.
//!
//! ```
//! use stache_value::Value;
//!
//! let data = Value::object()
//!     .with("name", "world")
//!     .with("items", Value::from(vec![Value::from("a"), Value::from("b")]));
//!
//! assert_eq!(data.get("name").and_then(Value::as_str), Some("world"));
//! assert_eq!(data.get("items").map(Value::len), Some(2));
//! assert!(!data.is_falsy());
//! ```

mod error;
mod object;
mod value;

pub use error::ValueError;
pub use object::Object;
pub use value::{Value, ValueKind};

//! Utility functions for common operations.
//!
//! - **URL validation**: the content service base URL and outbound links
//! - **Text processing**: Unicode-aware width, truncation and word wrapping
//!
//! # Examples
//!
//! ```
//! use tripview::util::{display_width, normalize_base_url, wrap_text};
//!
//! let base = normalize_base_url("http://localhost:8000/").unwrap();
//! assert_eq!(base, "http://localhost:8000");
//!
//! assert_eq!(display_width("Día"), 3);
//! assert_eq!(wrap_text("Isla del Sol", 6), vec!["Isla", "del", "Sol"]);
//! ```

mod text;
mod url_validator;

pub use text::{display_width, strip_control_chars, truncate_to_width, wrap_text};
pub use url_validator::{normalize_base_url, validate_url_for_open, BaseUrlError};

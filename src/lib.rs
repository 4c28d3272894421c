//! Remove comments from source text while leaving string literals intact.
//!
//! ```
//! use comment_remover::{SyntaxRegistry, remove_comments};
//!
//! let syntax = SyntaxRegistry::builtin().lookup("c_style").unwrap();
//! let cleaned = remove_comments("int x = 1; // set x\nint y = 2;", syntax);
//! assert_eq!(cleaned, "int x = 1; \nint y = 2;");
//! ```

pub mod config;
pub mod detect;
pub mod error;
pub mod files;
pub mod scanner;
pub mod syntax;
pub mod tidy;

pub use error::{Error, Result};
pub use scanner::{Advisory, ScanOutput, remove_comments, scan};
pub use syntax::{SyntaxDescription, SyntaxRegistry};

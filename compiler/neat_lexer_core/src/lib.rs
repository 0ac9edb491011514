//! Incremental tokenizer for `ConfigNeat`, a nested-block configuration language.
//!
//! The tokenizer is designed for editors and highlighters: it is driven one
//! line at a time, one token per call, and its whole state is a plain value
//! ([`LexerState`]) that can be cloned at any line boundary and resumed
//! later with identical results.
//!
//! ```text
//! let mut state = initial_state();
//! for line in lines {
//!     let mut stream = LineStream::new(line);
//!     while !stream.eol() {
//!         stream.start_token();
//!         let tag = next_token(&mut stream, &mut state);
//!         // style stream.current() with tag.style()
//!     }
//! }
//! ```
//!
//! # Design
//!
//! - [`LineStream`]: cursor over one line with peek, back-up and
//!   lookahead matching.
//! - [`BlockStack`]: one [`BlockContext`] per open `{ }` block; lexical
//!   rules only consult the innermost one.
//! - [`step`] / [`next_token`]: the rule cascade.
//! - [`match_boolean`]: the fixed boolean-literal grammar.
//!
//! This crate performs no I/O and has no dependencies on the rest of the
//! toolchain.

mod block;
mod literal;
mod state;
mod stream;
mod tag;
mod tokenizer;

pub use block::{BlockContext, BlockStack, ContextFlags, RootBlockPop};
pub use literal::match_boolean;
pub use state::{ErrorPolicy, LexerState, OpenConstructs};
pub use stream::LineStream;
pub use tag::Tag;
pub use tokenizer::{initial_state, next_token, step, UnbalancedCloseBrace};

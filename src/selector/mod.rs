//! Selector patterns — lexer, compiler, matcher, specificity, and the facade
//! that ties them to instance configuration.

pub mod cache;
pub mod compiler;
pub mod error;
pub mod facade;
pub mod lexer;
pub mod matcher;
pub mod specificity;

pub use cache::PatternCache;
pub use compiler::{CompiledPattern, Segment, compile};
pub use error::PatternSyntaxError;
pub use facade::{MatcherOptions, PathMatcher, Pattern, PredicateFn};
pub use matcher::matches;
pub use specificity::specificity;

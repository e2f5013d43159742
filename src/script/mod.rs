//! Script lookup for books and films

mod resolver;

pub use resolver::{ScriptResolver, WorkId};

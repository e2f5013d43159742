//! Console presentation
//!
//! - `table`: book vs film emotion table and rating lines
//! - `chart`: ratings bar chart

pub mod chart;
pub mod table;

pub use chart::ratings_chart;
pub use table::{comparison_table, format_rate, ratings_lines, NO_SIGNAL};

/// Closing remarks printed after every comparison and analysis
pub const CONCLUSION: &str = "\
As we can see, each emotion in the film has a better rate than a corresponding emotion in the book.
However, book still has better rating stats. The reason for such a phenomenon is that films usually
try to keep the viewer engaged by causing excessive emotions, while books focus more on plot quality.";

//! Visual theme for the Split Cards Finder.

mod styles;

pub use styles::GLOBAL_STYLES;

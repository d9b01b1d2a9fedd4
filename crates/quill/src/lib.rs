//! Richtext conversion for the sidebar chat panel.
//!
//! Two independent pipelines that share only their escaping helpers:
//! [`blocks::segment`] splits raw message content into prose and fenced code
//! blocks, [`render::render_markdown`] rewrites markdown prose into the
//! restricted HTML subset the richtext widget accepts, and
//! [`highlight::highlight_code`] colors code blocks using the per-language
//! regex tables in [`languages`].
//!
//! Every operation is a pure function of its inputs plus two process-wide
//! immutable registries (the built-in language table and the default color
//! palette), so calls are safe from any thread without synchronization.

pub mod blocks;
mod escape;
pub mod highlight;
pub mod languages;
pub mod render;
pub mod theme;

pub use blocks::{has_unterminated_fence, segment, Block, BlockKind};
pub use highlight::highlight_code;
pub use languages::{resolve, supported_languages};
pub use render::render_markdown;
pub use theme::{SyntaxColors, ThemeColors};

//! Content domain: the canonical model, schema normalization, the bundled
//! fallback tier, live source adapters, and the resolution chain that ties
//! the tiers together.

pub mod bundle;
pub mod model;
pub mod normalize;
pub mod resolver;
pub mod source;

pub use model::{Article, ArticleSet, Language, Localized, Section};
pub use resolver::{ContentResolver, Latest, Outcome, Resolution};
pub use source::{ContentSource, SourceError};

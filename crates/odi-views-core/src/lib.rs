//! odi-views-core - Presentation helpers for ODI site content
//!
//! Stateless transforms from content API records (assets, publications,
//! people, event sessions) to escaped HTML fragments and small display
//! structures consumed by templates.

pub mod caption;
pub mod config;
pub mod dates;
pub mod errors;
pub mod fetch;
pub mod html;
pub mod lookup;
pub mod meta;
pub mod partials;
pub mod sessions;
pub mod titles;
pub mod types;

pub use caption::*;
pub use config::*;
pub use dates::*;
pub use errors::*;
pub use fetch::*;
pub use html::{escape, SafeHtml};
pub use lookup::*;
pub use meta::*;
pub use partials::*;
pub use sessions::*;
pub use titles::*;
pub use types::*;

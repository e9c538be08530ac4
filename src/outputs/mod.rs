//! Page-building output modules.
//!
//! # Submodules
//!
//! - [`html`]: escaping-aware fragment rendering (featured block, news cards,
//!   letter navigation, grouped glossary)
//! - [`page`]: template substitution and the final `index.html` write

pub mod html;
pub mod page;

//! A small, framework-agnostic element tree and the generic widgets built on it.

mod chart;
mod listing;
mod node;

pub use chart::{ChartData, ChartSize, DonutChart};
pub use listing::{Listing, ListingColumn, ListingRow, ListingState, Presence, TabRenderer};
pub use node::{el, Callback, Element, Node};

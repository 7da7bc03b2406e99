pub mod tables;

pub use tables::{normalize, AmbiguousEntry, ConstituencyRecord, ReferenceError, ReferenceTables, RegionRecord};

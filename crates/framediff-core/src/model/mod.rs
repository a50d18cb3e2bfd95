pub mod element;
pub mod snapshot;

pub use element::Element;
pub use snapshot::Snapshot;

mod merge;
mod unmerge;

pub use merge::merge;
pub use unmerge::unmerge;

pub mod merge;
pub mod unmerge;

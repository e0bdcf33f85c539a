pub mod compare;
pub mod lines;
pub mod model;
pub mod report;
pub mod trace;

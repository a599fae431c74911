pub mod consts;
pub mod directory;
pub mod model;
pub mod persistence;

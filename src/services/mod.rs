// License: MIT

pub mod ticker;

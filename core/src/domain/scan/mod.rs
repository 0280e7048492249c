pub mod catalog;
pub mod client;
pub mod entities;
pub mod export;
pub mod history;
pub mod normalize;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

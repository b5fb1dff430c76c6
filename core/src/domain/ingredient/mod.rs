pub mod classifier;
pub mod entities;
pub mod ports;
pub mod sanitizer;
pub mod schema;
pub mod services;
pub mod table;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;

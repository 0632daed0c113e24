pub mod book;
pub mod commands;
pub mod member;
pub mod reservation;
pub mod value_objects;

pub use book::*;
pub use member::*;
pub use reservation::*;
pub use value_objects::*;

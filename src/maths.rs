pub mod bridge;
pub mod convert;
pub mod element;
pub mod layout;
pub mod vector;

pub mod playlist;
pub mod search;
pub mod session;

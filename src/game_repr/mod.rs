mod board;
mod moves;
mod oracle;
mod piece;
pub mod bitboards;

#[cfg(test)]
mod tests;

pub use board::*;
pub use moves::*;
pub use oracle::*;
pub use piece::*;

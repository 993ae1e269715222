/// Fixed-size bitset over tile indices
pub mod bitset;
/// Candidate generation from neighbor constraints
pub mod constraints;
/// Copy-on-branch pools of unplaced tiles
pub mod pool;
/// Lazy depth-first enumeration of solutions
pub mod search;

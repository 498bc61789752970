/// Inbound alert instruction and tolerant scalar types
pub mod instruction;
/// Order vocabulary: direction, type, duration, action, deal status
pub mod order;

pub mod emitter;
pub mod row;

pub mod convention;
pub mod erlang;
pub mod gunther;
pub mod sakasegawa;

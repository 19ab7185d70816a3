pub mod hostname;
pub mod hostport;
pub mod ip;
pub mod range;

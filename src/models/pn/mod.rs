pub mod diode;
pub mod electrostatics;
pub mod pn;
pub mod profiles;

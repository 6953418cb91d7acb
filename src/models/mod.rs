pub mod pn;

mod character;
mod common;
mod market;
mod raw;
mod root;
mod route;
mod status;
mod token;
mod universe;

pub(crate) use root::get_args;

// -----------------------------------------------------------------------------
// Modules

mod driver;
mod struct_visitor;

// -----------------------------------------------------------------------------
// Exports

pub use driver::DeserializeDriver;

// -----------------------------------------------------------------------------
// Modules

mod driver;
mod struct_serializer;

// -----------------------------------------------------------------------------
// Exports

pub use driver::SerializeDriver;

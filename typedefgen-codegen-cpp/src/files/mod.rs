mod typedefs_header;

pub use typedefs_header::TypedefsHeader;

//! Tag table XML generator module.

mod xml;

pub use xml::generate_xml;

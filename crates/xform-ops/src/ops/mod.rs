//! Ready-made add operations
//!
//! Each constructor pairs an element identity with the probe and delegate
//! for one element kind. The returned operation has no policy set; configure
//! it through [`AddElement`](crate::AddElement) before executing.

mod descriptor;
mod properties;
mod tree;

pub use descriptor::{
    add_dependency, add_descriptor_property, add_managed_dependency, add_managed_plugin, add_plugin,
};
pub use properties::add_property;
pub use tree::{add_file, add_folder};

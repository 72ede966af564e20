//! Package manifest loading.
//!
//! Reads the installed `package.json` of a patched dependency and builds the
//! [`PackageDescriptor`] the rest of the crate works with.

mod error;
mod package;

pub use error::ManifestError;
pub use package::{package_dir_for, PackageDescriptor, PackageManifest, MANIFEST_FILE_NAME};

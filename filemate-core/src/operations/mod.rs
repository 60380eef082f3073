pub mod change_ext;
pub mod rename;

pub use change_ext::{change_ext_operation, change_ext_operation_with_probe};
pub use rename::{rename_operation, rename_operation_with_probe};

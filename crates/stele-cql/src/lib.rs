pub mod generator;
pub use generator::{
    delete, insert, insert_if_not_exists, prepend_delete, prepend_update, update,
};

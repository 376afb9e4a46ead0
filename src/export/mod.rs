mod path_data;

pub use path_data::{to_path_data, PathClose};

pub mod error;
pub mod formats;
pub mod fs;
pub mod logging;

pub use error::{OptimizerError, OptimizerResult, PathError, ValidationError};
pub use formats::{ImageFormat, is_recognized_image};
pub use fs::{
    get_file_size,
    is_regular_file,
    dir_exists,
    create_dir_all,
    read_dir,
    list_image_names,
};
pub use logging::init_logging;

pub mod pool;
pub mod profile;

pub use pool::create_pool;
pub use profile::{
    get_profile_from_metadata, get_profile_from_request, set_current_profile,
    DEFAULT_PROFILE_ID, PROFILE_METADATA_KEY,
};

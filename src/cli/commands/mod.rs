mod seed;
mod user;

pub use seed::{SAMPLE_TYPES, cmd_seed, seed_sample_data};
pub use user::{cmd_user_add, cmd_user_list, cmd_user_token};

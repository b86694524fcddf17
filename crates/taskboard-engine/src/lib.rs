pub mod banner;
pub mod board;
pub mod mutation;

pub use banner::{Banner, BannerVariant, TRANSIENT_TTL};
pub use board::{BoardController, CreateContext, EditContext};
pub use mutation::MutationEngine;

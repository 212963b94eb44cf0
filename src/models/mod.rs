pub mod category;
pub mod pledge;
pub mod project;
pub mod reward;
pub mod user;

pub use category::Category;
pub use pledge::{Pledge, PledgeStatus};
pub use project::{Project, ProjectView};
pub use reward::RewardTier;
pub use user::User;
